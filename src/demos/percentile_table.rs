use std::fmt::Write;

use crate::utils::math::{as_percentile, standard_normal_cdf};

/// The z-scores walked through by default: whole standard deviations
/// on either side of the mean.
pub const CANONICAL_Z_SCORES: [f64; 7] = [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0];

#[derive(Debug, Clone)]
pub struct TableRow {
    pub z: f64,
    pub cdf: f64,
    pub percentile: f64,
    pub meaning: String,
}

pub fn build_rows(z_scores: &[f64]) -> Vec<TableRow> {
    z_scores
        .iter()
        .map(|&z| {
            let cdf = standard_normal_cdf(z);
            let percentile = as_percentile(cdf);
            TableRow {
                z,
                cdf,
                percentile,
                meaning: meaning(z, percentile),
            }
        })
        .collect()
}

fn meaning(z: f64, percentile: f64) -> String {
    if z == 0.0 {
        "Exactly at the mean".to_string()
    } else {
        format!("{percentile:.1}% of values are below this point")
    }
}

pub fn render(rows: &[TableRow]) -> String {
    let mut out = String::new();
    out.push_str("Standard Normal Distribution: μ = 0, σ = 1\n");
    out.push_str("PDF: f(x) = (1/√(2π)) · e^(−x²/2)\n\n");
    out.push_str("Z-Score | CDF Value | Percentile | Meaning\n");
    out.push_str(&"-".repeat(55));
    out.push('\n');
    for row in rows {
        let _ = writeln!(
            out,
            "{:7.1} | {:9.6} | {:9.2}% | {}",
            row.z, row.cdf, row.percentile, row.meaning
        );
    }
    out.push_str("\nCDF(z) = P(Z ≤ z): the area under the density up to z.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_z_score() {
        let rows = build_rows(&CANONICAL_Z_SCORES);
        assert_eq!(rows.len(), CANONICAL_Z_SCORES.len());
    }

    #[test]
    fn percentiles_increase_with_z() {
        let rows = build_rows(&CANONICAL_Z_SCORES);
        for pair in rows.windows(2) {
            assert!(pair[0].percentile < pair[1].percentile);
        }
    }

    #[test]
    fn mean_row_is_special_cased() {
        let rows = build_rows(&[0.0, 1.0]);
        assert_eq!(rows[0].meaning, "Exactly at the mean");
        assert!(rows[1].meaning.contains("below this point"));
        assert!((rows[0].percentile - 50.0).abs() < 1e-9);
    }

    #[test]
    fn render_contains_every_row() {
        let rows = build_rows(&CANONICAL_Z_SCORES);
        let text = render(&rows);
        assert!(text.contains("Z-Score"));
        assert!(text.contains("84.13%"));
        assert!(text.contains("Exactly at the mean"));
    }
}
