//! Mapping from raw progress to the discrete step shown by the overlay.

/// Step index for progress `t` over `keyframe_count` keyframes.
///
/// Computed as `round(t × (count − 1))` and clamped to `[0, count − 1]`.
/// Callers pass raw (unsmoothed) progress so the indicator follows the
/// scroll position even while the camera lags behind it. NaN maps to 0.
pub fn step_index(t: f32, keyframe_count: usize) -> usize {
    let Some(last) = keyframe_count.checked_sub(1) else {
        return 0;
    };
    let exact = (t * last as f32).round();
    if exact.is_nan() || exact <= 0.0 {
        return 0;
    }
    (exact as usize).min(last)
}
