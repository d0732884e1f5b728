/// `1 / sqrt(2π)`, the normalizing constant of the standard normal density.
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal probability density function:
/// `f(x) = (1/√(2π)) · e^(−x²/2)`.
#[inline]
pub fn standard_normal_pdf(x: f64) -> f64 {
    INV_SQRT_2PI * (-0.5 * x * x).exp()
}
