use crate::core::standard_normal_pdf;

pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_HEIGHT: usize = 14;

// Plotted span; beyond ±4 the density is not visible at console resolution.
const X_MIN: f64 = -4.0;
const X_MAX: f64 = 4.0;

/// Character-grid rendering of the standard normal density over [-4, 4].
///
/// Columns at or below `z` are filled, showing the mass `P(Z ≤ z)`; the
/// rest of the curve is outlined. The last row is an x-axis with a marker
/// under `z` when it falls inside the plotted span.
pub fn density_sketch(z: f64, width: usize, height: usize) -> Vec<String> {
    let width = width.max(2);
    let height = height.max(1);
    let peak = standard_normal_pdf(0.0);

    let columns: Vec<(f64, usize)> = (0..width)
        .map(|c| {
            let x = X_MIN + (X_MAX - X_MIN) * c as f64 / (width - 1) as f64;
            let bar = ((standard_normal_pdf(x) / peak) * height as f64).round() as usize;
            (x, bar)
        })
        .collect();

    let mut rows = Vec::with_capacity(height + 1);
    for level in (1..=height).rev() {
        let mut row = String::with_capacity(width);
        for &(x, bar) in &columns {
            row.push(match bar >= level {
                true if x <= z => '█',
                true => '·',
                false => ' ',
            });
        }
        rows.push(row);
    }

    let marker = if (X_MIN..=X_MAX).contains(&z) {
        Some(((z - X_MIN) / (X_MAX - X_MIN) * (width - 1) as f64).round() as usize)
    } else {
        None
    };
    let mut axis = String::with_capacity(width);
    for c in 0..width {
        axis.push(if marker == Some(c) { '▲' } else { '─' });
    }
    rows.push(axis);

    rows
}

pub fn render(rows: &[String]) -> String {
    let mut out = rows.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaded(rows: &[String]) -> usize {
        rows.iter()
            .flat_map(|r| r.chars())
            .filter(|&c| c == '█')
            .count()
    }

    #[test]
    fn grid_has_requested_dimensions() {
        let rows = density_sketch(0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert_eq!(rows.len(), DEFAULT_HEIGHT + 1);
        for row in &rows {
            assert_eq!(row.chars().count(), DEFAULT_WIDTH);
        }
    }

    #[test]
    fn shaded_area_grows_with_z() {
        let low = shaded(&density_sketch(-1.0, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let mid = shaded(&density_sketch(0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let high = shaded(&density_sketch(1.0, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(low < mid);
        assert!(mid < high);
    }

    #[test]
    fn z_outside_span_still_renders() {
        let rows = density_sketch(6.0, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        // fully shaded curve, marker suppressed
        assert!(shaded(&rows) > 0);
        assert!(!rows.last().unwrap().contains('▲'));
    }

    #[test]
    fn axis_marks_the_mean() {
        let rows = density_sketch(0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT);
        assert!(rows.last().unwrap().contains('▲'));
    }
}
