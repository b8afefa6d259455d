//! Stateless numeric engines for the Abacus teaching toolkit.
//!
//! Three sibling engines with no cross-calls, each a flat set of pure
//! functions over scalars and slices:
//! - **Calculus**: finite-difference derivatives, Simpson integration,
//!   one-/two-sided limit estimation, critical-point grid scan.
//! - **Algebra**: quadratic roots (real or complex), integer gcd/lcm,
//!   brute-force quadratic factoring, plus polynomial and sequence helpers.
//! - **Stats**: central tendency, dispersion, correlation/regression, and
//!   combinatorial counts.
//!
//! The caller supplies scalar functions to the calculus engine through the
//! [`traits::RealFunction`] seam; every closure `Fn(f64) -> f64` qualifies.

pub mod algebra;
pub mod calculus;
pub mod polynomial;
pub mod sequences;
pub mod stats;
pub mod traits;
