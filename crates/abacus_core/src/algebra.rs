use anyhow::{bail, Result};
use num_complex::Complex64;
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

/// Roots of a quadratic with real coefficients.
///
/// A vanishing discriminant yields two numerically equal `Real` roots;
/// nothing is deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuadraticRoots {
    /// Real roots, the `+` branch of the formula first.
    Real(f64, f64),
    /// Complex-conjugate pair, positive imaginary part first.
    Complex(Complex64, Complex64),
}

/// Solves ax² + bx + c = 0 by the quadratic formula.
///
/// A zero leading coefficient leaves no quadratic to solve and is rejected
/// rather than divided by.
pub fn quadratic_formula(a: f64, b: f64, c: f64) -> Result<QuadraticRoots> {
    if a == 0.0 {
        bail!("Leading coefficient must be non-zero.");
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant >= 0.0 {
        let root = discriminant.sqrt();
        Ok(QuadraticRoots::Real(
            (-b + root) / (2.0 * a),
            (-b - root) / (2.0 * a),
        ))
    } else {
        let re = -b / (2.0 * a);
        let im = discriminant.abs().sqrt() / (2.0 * a);
        Ok(QuadraticRoots::Complex(
            Complex64::new(re, im),
            Complex64::new(re, -im),
        ))
    }
}

/// Greatest common divisor by the iterative Euclidean algorithm.
/// Always non-negative, even for negative inputs.
pub fn gcd<I: PrimInt + Signed>(mut a: I, mut b: I) -> I {
    while b != I::zero() {
        let t = b;
        b = a % b;
        a = t;
    }
    a.abs()
}

/// Least common multiple |a·b| / gcd(a, b).
/// The inputs must not both be zero; that gcd is zero and has no multiple.
pub fn lcm<I: PrimInt + Signed>(a: I, b: I) -> I {
    (a * b).abs() / gcd(a, b)
}

/// Factors ax² + bx + c into (mx + n)(px + q) over the integers.
///
/// Searches divisors `i` of a·c across [−|ac|, |ac|] in ascending order for
/// a companion `j = ac/i` with `i + j = b`; the first hit wins, so inputs
/// admitting several factorizations always resolve the same way. Factors
/// come out as ((a/g, i/g), (g, j)) with g = gcd(a, i). `None` when the
/// scan is exhausted. The search is O(|ac|), sized for textbook
/// coefficients.
pub fn factor_quadratic(a: i64, b: i64, c: i64) -> Option<((i64, i64), (i64, i64))> {
    let ac = a * c;

    for i in -ac.abs()..=ac.abs() {
        if i == 0 {
            continue;
        }
        if ac % i == 0 {
            let j = ac / i;
            if i + j == b {
                let g = gcd(a, i);
                return Some(((a / g, i / g), (g, j)));
            }
        }
    }

    None
}
