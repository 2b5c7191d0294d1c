//! Ordinary least squares trend line over a value sequence.
//!
//! The independent variable is the point index (0, 1, 2, ...), matching the
//! upstream trend analysis, so the output aligns one-to-one with the input.

/// Least-squares slope and intercept for `values` against their indices.
/// None when fewer than two values (no regression possible). For n >= 2 the
/// denominator is a positive function of distinct indices, so this never
/// divides by zero.
pub fn linear_fit(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n_f;
    Some((slope, intercept))
}

/// Fitted trend values, same length as the input. Fewer than two points
/// returns the input unchanged.
pub fn compute_trend(values: &[f64]) -> Vec<f64> {
    match linear_fit(values) {
        Some((slope, intercept)) => (0..values.len())
            .map(|i| slope * i as f64 + intercept)
            .collect(),
        None => values.to_vec(),
    }
}
