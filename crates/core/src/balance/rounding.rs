//! Presentation rounding.

/// Rounds to two decimal places, halves away from zero.
///
/// Negative zero is normalised to `0.0`.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}
