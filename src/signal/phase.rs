//! Phase wrapping, interpolation and clamping.

/// Phase difference `s1 - s2` wrapped into `(-pi, pi]`.
#[inline]
pub fn phase_difference(s1: f64, s2: f64) -> f64 {
    let d = s1 - s2;
    d.sin().atan2(d.cos())
}

/// Linear interpolation `(1 - t) * x0 + t * x1`.
///
/// `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn lerp(x0: f64, x1: f64, t: f64) -> f64 {
    (1.0 - t) * x0 + t * x1
}

/// Restrict `value` to `[min, max]` as `max(min, min(max, value))`.
///
/// Unlike [`f64::clamp`] this never panics. When `min > max` the outer `max`
/// wins and the result is `min` whatever `value` is.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}
