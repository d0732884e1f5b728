use std::f64::consts::FRAC_1_SQRT_2;

/// Closed-form standard normal CDF: `Φ(z) = ½ · (1 + erf(z/√2))`.
///
/// This is the reference the trapezoidal estimate is checked against; the
/// estimator itself never calls it.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z * FRAC_1_SQRT_2))
}

/// A cumulative probability expressed as a percentile.
#[inline]
pub fn as_percentile(p: f64) -> f64 {
    p * 100.0
}
