//! Dense uniform-parameter resampling of a curve.
//!
//! Authored keyframes are sparse and unevenly spaced, so traversal speed
//! along the coarse curve varies from span to span. Sampling the coarse curve
//! densely and refitting a second curve through the samples spreads the
//! parameter range over many short, nearly equal spans. The two steps are
//! kept separate so either can be swapped out.

use glam::Vec3;

use super::spline::{CurveKind, PathCurve};
use crate::Result;

/// Default number of intervals sampled from the coarse curve.
pub const DEFAULT_RESOLUTION: usize = 1500;

/// Sample `curve` at `resolution + 1` evenly spaced parameter values.
///
/// Sampling is uniform in the curve parameter, not in arc length. A
/// degenerate sample is kept as a NaN point so sample `i` always sits at
/// parameter `i / resolution`, and the refitted curve stays degenerate over
/// the same range. A `resolution` of zero is treated as one.
pub fn resample(curve: &PathCurve, resolution: usize) -> Vec<Vec3> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| {
            curve
                .sample_at(i as f32 / resolution as f32)
                .unwrap_or(Vec3::NAN)
        })
        .collect()
}

/// Resample `curve` and fit a new curve of `kind` through the samples.
pub fn refit(
    curve: &PathCurve,
    resolution: usize,
    kind: CurveKind,
) -> Result<PathCurve> {
    PathCurve::new(resample(curve, resolution), kind)
}
