//! Standard normal distribution.
//!
//! The cumulative function delegates to the `statrs` complementary error
//! function. Its absolute error is of order 1e-11, well below the
//! discretisation error of any lattice it is compared against.

use crr_core::Real;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// The standard normal cumulative distribution function Φ(x).
///
/// `Φ(x) = ½ · erfc(−x / √2)`
#[inline]
pub fn normal_cdf(x: Real) -> Real {
    0.5 * erfc(-x / SQRT_2)
}
