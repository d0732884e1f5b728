use thiserror::Error;

use crate::core::density::standard_normal_pdf;

/// Lower integration bound standing in for -∞: the standard normal mass
/// below this point is negligible at f64 precision.
pub const NEGLIGIBLE_MASS_BOUND: f64 = -10.0;

/// Sampling resolution used by the demos unless the caller overrides it.
pub const DEFAULT_INTERVALS: usize = 1000;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Composite trapezoidal-rule estimator for the standard normal CDF.
///
/// Samples the density at `intervals` equally spaced points between
/// `lower_bound` and `z` (both endpoints included) and sums the trapezoids:
/// `dx · (f(x₀)/2 + f(x₁) + … + f(x_{n−2}) + f(x_{n−1})/2)`.
///
/// Pure value type; carries no state between calls.
#[derive(Debug, Clone, Copy)]
pub struct TrapezoidCdf {
    lower_bound: f64,
    intervals: usize,
}

impl TrapezoidCdf {
    /// Rule with the standard lower bound ([`NEGLIGIBLE_MASS_BOUND`]).
    pub fn new(intervals: usize) -> Result<Self, QuadratureError> {
        Self::with_lower_bound(NEGLIGIBLE_MASS_BOUND, intervals)
    }

    pub fn with_lower_bound(lower_bound: f64, intervals: usize) -> Result<Self, QuadratureError> {
        if !lower_bound.is_finite() {
            return Err(QuadratureError::InvalidParameter(format!(
                "lower bound must be finite, got {lower_bound}"
            )));
        }
        if intervals < 2 {
            return Err(QuadratureError::InvalidParameter(format!(
                "intervals must be at least 2, got {intervals}"
            )));
        }
        Ok(TrapezoidCdf {
            lower_bound,
            intervals,
        })
    }

    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[inline]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Estimate `P(Z ≤ z)`.
    ///
    /// A `z` at or below the lower bound collapses the sample range to a
    /// single point; the estimate is then `0.0` rather than an error.
    pub fn estimate(&self, z: f64) -> Result<f64, QuadratureError> {
        if !z.is_finite() {
            return Err(QuadratureError::InvalidParameter(format!(
                "z must be finite, got {z}"
            )));
        }
        if z <= self.lower_bound {
            return Ok(0.0);
        }

        let dx = (z - self.lower_bound) / (self.intervals - 1) as f64;
        let mut area = 0.5 * (standard_normal_pdf(self.lower_bound) + standard_normal_pdf(z));
        for i in 1..self.intervals - 1 {
            area += standard_normal_pdf(self.lower_bound + i as f64 * dx);
        }
        Ok(dx * area)
    }
}
