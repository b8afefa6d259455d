/// First `n` terms of the arithmetic sequence a1, a1 + d, a1 + 2d, ...
pub fn arithmetic_sequence(a1: f64, d: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| a1 + i as f64 * d).collect()
}

/// First `n` terms of the geometric sequence a1, a1·r, a1·r², ...
pub fn geometric_sequence(a1: f64, r: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| a1 * r.powi(i as i32)).collect()
}

/// Closed-form sum n(a1 + an)/2 of an arithmetic sequence, from its first
/// and last terms.
pub fn arithmetic_sum(a1: f64, an: f64, n: usize) -> f64 {
    n as f64 * (a1 + an) / 2.0
}

/// Closed-form sum of a geometric sequence.
///
/// Ratios within 1e-10 of one take the degenerate a1·n branch; the closed
/// form a1(1 − rⁿ)/(1 − r) applies otherwise.
pub fn geometric_sum(a1: f64, r: f64, n: usize) -> f64 {
    if (r - 1.0).abs() < 1e-10 {
        a1 * n as f64
    } else {
        a1 * (1.0 - r.powi(n as i32)) / (1.0 - r)
    }
}

#[cfg(test)]
mod tests {
    use super::{arithmetic_sequence, arithmetic_sum, geometric_sequence, geometric_sum};

    #[test]
    fn arithmetic_terms_and_sum_agree() {
        let seq = arithmetic_sequence(3.0, 5.0, 8);
        assert_eq!(seq, vec![3.0, 8.0, 13.0, 18.0, 23.0, 28.0, 33.0, 38.0]);

        let closed_form = arithmetic_sum(3.0, 38.0, 8);
        assert_eq!(closed_form, seq.iter().sum::<f64>());
    }

    #[test]
    fn geometric_terms_and_sum_agree() {
        let seq = geometric_sequence(2.0, 3.0, 6);
        assert_eq!(seq, vec![2.0, 6.0, 18.0, 54.0, 162.0, 486.0]);

        let closed_form = geometric_sum(2.0, 3.0, 6);
        assert_eq!(closed_form, 728.0);
        assert_eq!(closed_form, seq.iter().sum::<f64>());
    }

    #[test]
    fn empty_sequences() {
        assert!(arithmetic_sequence(1.0, 1.0, 0).is_empty());
        assert!(geometric_sequence(1.0, 2.0, 0).is_empty());
        assert_eq!(arithmetic_sum(1.0, 1.0, 0), 0.0);
        assert_eq!(geometric_sum(1.0, 2.0, 0), 0.0);
    }

    #[test]
    fn unit_ratio_takes_the_degenerate_branch() {
        assert_eq!(geometric_sum(5.0, 1.0, 4), 20.0);
        // Within the 1e-10 window the sum is still a1·n, not the closed form.
        assert_eq!(geometric_sum(5.0, 1.0 + 1e-11, 4), 20.0);
    }

    #[test]
    fn near_unit_ratio_outside_the_window_uses_the_closed_form() {
        let sum = geometric_sum(5.0, 1.0 + 1e-6, 4);
        assert!(sum != 20.0);
        assert!((sum - 20.0).abs() < 1e-3);
    }
}
