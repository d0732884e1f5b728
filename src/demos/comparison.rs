use std::fmt::Write;

use crate::core::{QuadratureError, TrapezoidCdf};
use crate::utils::math::standard_normal_cdf;

/// Z-scores used when the caller does not pick their own.
pub const DEFAULT_TEST_POINTS: [f64; 5] = [-2.0, -1.0, 0.0, 1.0, 2.0];

/// One oracle-versus-estimate data point.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonRow {
    pub z: f64,
    pub reference: f64,
    pub estimate: f64,
    pub difference: f64,
}

/// Evaluate the closed-form CDF and the trapezoidal estimate side by side.
pub fn compare(
    z_scores: &[f64],
    rule: &TrapezoidCdf,
) -> Result<Vec<ComparisonRow>, QuadratureError> {
    z_scores
        .iter()
        .map(|&z| {
            let reference = standard_normal_cdf(z);
            let estimate = rule.estimate(z)?;
            Ok(ComparisonRow {
                z,
                reference,
                estimate,
                difference: (reference - estimate).abs(),
            })
        })
        .collect()
}

pub fn render(rows: &[ComparisonRow], rule: &TrapezoidCdf) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Closed-form CDF vs trapezoidal rule ({} points from {}):\n",
        rule.intervals(),
        rule.lower_bound()
    );
    out.push_str("Z-Score | Closed-form CDF | Trapezoidal Est. | Difference\n");
    out.push_str(&"-".repeat(60));
    out.push('\n');
    for row in rows {
        let _ = writeln!(
            out,
            "{:7.1} | {:15.8} | {:16.8} | {:.2e}",
            row.z, row.reference, row.estimate, row.difference
        );
    }
    out
}
