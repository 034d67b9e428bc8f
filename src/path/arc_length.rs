//! Cumulative arc-length table for true constant-speed traversal.
//!
//! The engine samples curves by parameter; this table maps a normalized
//! distance `u` back to the parameter `t` that reaches it, for callers that
//! want exact arc-length parametrization instead of resampling.

use glam::Vec3;

use super::spline::PathCurve;

/// Default number of chords used to approximate the curve length.
pub const DEFAULT_DIVISIONS: usize = 200;

/// Cumulative chord lengths at `divisions + 1` uniform parameter values.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    lengths: Vec<f32>,
}

impl ArcLengthTable {
    /// Measure `curve` with `divisions` chords (at least one).
    ///
    /// Degenerate samples contribute no length.
    pub fn new(curve: &PathCurve, divisions: usize) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut total = 0.0;
        let mut previous: Option<Vec3> = None;

        for i in 0..=divisions {
            let point = curve.sample_at(i as f32 / divisions as f32);
            if let (Some(a), Some(b)) = (previous, point) {
                total += a.distance(b);
            }
            if point.is_some() {
                previous = point;
            }
            lengths.push(total);
        }

        Self { lengths }
    }

    /// Approximate total length of the curve.
    pub fn total(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Curve parameter reaching the normalized distance `u ∈ [0, 1]`.
    pub fn parameter_at(&self, u: f32) -> f32 {
        let last = self.lengths.len() - 1;
        let total = self.total();
        if total <= 0.0 || !u.is_finite() {
            return u.clamp(0.0, 1.0);
        }

        let target = u.clamp(0.0, 1.0) * total;
        // Index of the last entry strictly below the target.
        let i = self
            .lengths
            .partition_point(|&len| len < target)
            .saturating_sub(1)
            .min(last.saturating_sub(1));

        let before = self.lengths[i];
        let span = self.lengths[i + 1] - before;
        let fraction = if span > 0.0 {
            ((target - before) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (i as f32 + fraction) / last as f32
    }
}

impl PathCurve {
    /// Measure this curve with [`DEFAULT_DIVISIONS`] chords.
    pub fn arc_lengths(&self) -> ArcLengthTable {
        ArcLengthTable::new(self, DEFAULT_DIVISIONS)
    }

    /// Point at normalized distance `u` along the curve, using `table`
    /// built from this curve.
    pub fn sample_at_arc_length(
        &self,
        table: &ArcLengthTable,
        u: f32,
    ) -> Option<Vec3> {
        self.sample_at(table.parameter_at(u))
    }
}
