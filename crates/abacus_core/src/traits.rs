use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the polynomial routines.
/// Must support basic arithmetic, debug printing, and conversion from primitives.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A single-variable real-valued function, sampled pointwise.
///
/// The calculus routines evaluate the function at arbitrary points a finite
/// number of times. Results are only meaningful for pure functions; nothing
/// here enforces purity, it is a caller contract.
pub trait RealFunction {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64> RealFunction for F {
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
