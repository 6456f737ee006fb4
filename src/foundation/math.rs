/// Clamp scalar value to normalized range `[0, 1]`.
///
/// `NaN` collapses to `0` so downstream style writes stay finite.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

#[inline]
pub(crate) fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Smallest strictly positive, finite value in `limits`, or `+inf` when none qualify.
pub(crate) fn min_positive_finite(limits: impl IntoIterator<Item = f64>) -> f64 {
    limits
        .into_iter()
        .filter(|v| v.is_finite() && *v > 0.0)
        .fold(f64::INFINITY, f64::min)
}

/// Check `value` is finite and inside `[lo, hi]`.
pub(crate) fn finite_in(value: f64, lo: f64, hi: f64) -> bool {
    value.is_finite() && value >= lo && value <= hi
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
