//! Standard test objectives. All are minimized at the origin with value 0.

use std::f64::consts::PI;

/// Sum of absolute values.
pub fn sum_abs(x: &[f64]) -> f64 {
    x.iter().map(|v| v.abs()).sum()
}

/// Sum of squares.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|v| v * v).sum()
}

/// Rastrigin function, `10n + sum(x^2 - 10 cos(2 pi x))`.
pub fn rastrigin(x: &[f64]) -> f64 {
    10.0 * x.len() as f64
        + x.iter()
            .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum::<f64>()
}
