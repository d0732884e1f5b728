use crate::core::{QuadratureError, TrapezoidCdf};
use crate::utils::math::{as_percentile, standard_normal_cdf};

/// Narrates, step by step, how a single z-score becomes a percentile,
/// then verifies the closed-form value by numerical integration.
pub fn narrate(z: f64, rule: &TrapezoidCdf) -> Result<Vec<String>, QuadratureError> {
    let cdf = standard_normal_cdf(z);
    let percentile = as_percentile(cdf);
    let estimate = rule.estimate(z)?;
    let difference = (cdf - estimate).abs();

    Ok(vec![
        format!("Question: what percentile does z = {z} represent?"),
        String::new(),
        format!("Step 1: we want P(Z ≤ {z}) where Z ~ N(0, 1)."),
        format!(
            "Step 2: that is ∫ from {} to {z} of (1/√(2π)) · e^(−x²/2) dx.",
            rule.lower_bound()
        ),
        format!("Step 3: the closed-form CDF gives Φ({z}) = {cdf:.6}."),
        format!("Step 4: as a percentile, {cdf:.6} × 100 = {percentile:.2}%."),
        format!(
            "Step 5: so {percentile:.2}% of values in a standard normal \
             distribution are at or below {z}."
        ),
        String::new(),
        format!(
            "Check: trapezoidal rule with {} points gives {estimate:.6} \
             (difference {difference:.2e}).",
            rule.intervals()
        ),
    ])
}

pub fn render(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_INTERVALS;

    #[test]
    fn narrates_all_steps() {
        let rule = TrapezoidCdf::new(DEFAULT_INTERVALS).unwrap();
        let lines = narrate(-1.0, &rule).unwrap();
        let text = render(&lines);
        for step in ["Step 1", "Step 2", "Step 3", "Step 4", "Step 5", "Check"] {
            assert!(text.contains(step), "missing {step}");
        }
    }

    #[test]
    fn quotes_the_expected_values() {
        let rule = TrapezoidCdf::new(DEFAULT_INTERVALS).unwrap();
        let text = render(&narrate(-1.0, &rule).unwrap());
        assert!(text.contains("0.158655"));
        assert!(text.contains("15.87%"));
    }

    #[test]
    fn propagates_invalid_z() {
        let rule = TrapezoidCdf::new(DEFAULT_INTERVALS).unwrap();
        assert!(narrate(f64::NAN, &rule).is_err());
    }
}
