#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Frame-rate independent exponential smoothing of `current` toward `target`.
///
/// `lambda` is the decay rate per second; `dt` is in seconds.
#[inline]
pub(crate) fn damp(current: f64, target: f64, lambda: f64, dt: f64) -> f64 {
    lerp(current, target, 1.0 - (-lambda * dt).exp())
}

#[inline]
pub(crate) fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

/// Milliseconds as reported by hosts to seconds, dropping negative and non-finite values.
#[inline]
pub(crate) fn ms_to_secs(ms: f64) -> f64 {
    finite_or(ms, 0.0).max(0.0) / 1000.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
