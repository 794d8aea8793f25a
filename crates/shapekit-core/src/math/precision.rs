//! Small-value handling for values that end up as divisors or scale factors.

/// Default minimum magnitude used by [`signed_tiny`] callers.
pub const DEFAULT_TINY_MAGNITUDE: f64 = 1e-6;

/// Default tolerance for approximate geometric comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Returns `value` unchanged when `|value| >= min_magnitude`, otherwise
/// `±min_magnitude` carrying the sign of `value`. Zero counts as positive.
pub fn signed_tiny(value: f64, min_magnitude: f64) -> f64 {
    if value.abs() >= min_magnitude {
        value
    } else if value < 0.0 {
        -min_magnitude
    } else {
        min_magnitude
    }
}

/// Like [`signed_tiny`], but reports a degenerate-geometry warning when the
/// clamp engages. `what` names the quantity in the log line.
pub fn clamp_tiny(value: f64, min_magnitude: f64, what: &str) -> f64 {
    let clamped = signed_tiny(value, min_magnitude);
    if clamped != value {
        tracing::warn!(
            quantity = what,
            value,
            clamped,
            "Degenerate geometry: value clamped away from zero"
        );
    }
    clamped
}
