//! Camera path construction from authored keyframes.
//!
//! A keyframe set yields four curves, built once and cached for the lifetime
//! of the set: a coarse position/target pair fitted directly through the
//! authored points, and a fine pair refitted through dense samples of the
//! coarse pair for even traversal speed.

/// Cumulative arc-length lookup for constant-speed sampling.
pub mod arc_length;
/// Keyframe data and validated keyframe sets.
pub mod keyframe;
/// Dense resampling and refitting of curves.
pub mod resample;
/// Catmull-Rom curve evaluation.
pub mod spline;

use glam::Vec3;

pub use arc_length::ArcLengthTable;
pub use keyframe::{Caption, Keyframe, KeyframeSet};
pub use spline::{CurveKind, PathCurve};

use crate::options::PathOptions;
use crate::playback::PlaybackMode;
use crate::Result;

/// A position curve and the target curve sampled alongside it.
#[derive(Debug, Clone, Copy)]
pub struct CurvePair<'a> {
    /// Camera position curve.
    pub position: &'a PathCurve,
    /// Look-at target curve.
    pub target: &'a PathCurve,
}

impl CurvePair<'_> {
    /// Sample both curves at `t`. `None` if either sample is degenerate.
    pub fn sample_at(&self, t: f32) -> Option<(Vec3, Vec3)> {
        Some((self.position.sample_at(t)?, self.target.sample_at(t)?))
    }
}

/// The coarse and resampled curve pairs for one keyframe set.
#[derive(Debug, Clone)]
pub struct PathCurves {
    coarse_position: PathCurve,
    coarse_target: PathCurve,
    fine_position: PathCurve,
    fine_target: PathCurve,
    fingerprint: u64,
}

impl PathCurves {
    /// Build all four curves for `keyframes`.
    pub fn build(keyframes: &KeyframeSet, options: &PathOptions) -> Result<Self> {
        options.validate()?;

        let coarse_position =
            PathCurve::new(keyframes.positions(), options.coarse_kind)?;
        let coarse_target =
            PathCurve::new(keyframes.targets(), options.coarse_kind)?;

        let fine_position = resample::refit(
            &coarse_position,
            options.resolution,
            options.fine_kind,
        )?;
        let fine_target = resample::refit(
            &coarse_target,
            options.resolution,
            options.fine_kind,
        )?;

        log::debug!(
            "Built camera path: {} keyframes, {} fine samples per curve",
            keyframes.len(),
            fine_position.points().len()
        );

        Ok(Self {
            coarse_position,
            coarse_target,
            fine_position,
            fine_target,
            fingerprint: keyframes.fingerprint(),
        })
    }

    /// Curves fitted directly through the authored keyframes.
    pub fn coarse(&self) -> CurvePair<'_> {
        CurvePair {
            position: &self.coarse_position,
            target: &self.coarse_target,
        }
    }

    /// Curves refitted through dense samples of the coarse pair.
    pub fn fine(&self) -> CurvePair<'_> {
        CurvePair {
            position: &self.fine_position,
            target: &self.fine_target,
        }
    }

    /// Pair sampled in `mode`: cinematic playback uses the fine pair, snap
    /// playback the coarse one.
    pub fn pair(&self, mode: PlaybackMode) -> CurvePair<'_> {
        match mode {
            PlaybackMode::Snap => self.coarse(),
            PlaybackMode::Cinematic => self.fine(),
        }
    }

    /// Fingerprint of the keyframe set these curves were built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Whether these curves were built from `keyframes`.
    ///
    /// The fingerprint is only a fast reject; equal fingerprints are
    /// confirmed against the stored control points bit for bit.
    pub fn matches(&self, keyframes: &KeyframeSet) -> bool {
        self.fingerprint == keyframes.fingerprint()
            && same_points(self.coarse_position.points(), &keyframes.positions())
            && same_points(self.coarse_target.points(), &keyframes.targets())
    }
}

/// Bitwise equality, so a NaN control point still matches itself.
fn same_points(a: &[Vec3], b: &[Vec3]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(p, q)| {
            p.to_array().map(f32::to_bits) == q.to_array().map(f32::to_bits)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five keyframes on a half circle above the origin.
    fn arc_set() -> KeyframeSet {
        let keyframes = (0..5)
            .map(|i| {
                let angle = std::f32::consts::PI * i as f32 / 4.0;
                Keyframe::new(
                    Vec3::new(4.0 * angle.cos(), 1.5, 4.0 * angle.sin()),
                    Vec3::new(0.0, 0.5, 0.0),
                )
            })
            .collect();
        KeyframeSet::new(keyframes).unwrap()
    }

    #[test]
    fn coarse_curve_hits_first_and_last_keyframes() {
        for set in [arc_set(), KeyframeSet::showcase()] {
            let curves = PathCurves::build(&set, &PathOptions::default()).unwrap();
            let positions = set.positions();
            let start = curves.coarse().position.sample_at(0.0).unwrap();
            let end = curves.coarse().position.sample_at(1.0).unwrap();
            assert!((start - positions[0]).length() < 1e-3);
            assert!((end - positions[positions.len() - 1]).length() < 1e-3);
        }
    }

    #[test]
    fn fine_curves_use_the_configured_resolution() {
        let options = PathOptions {
            resolution: 200,
            ..PathOptions::default()
        };
        let curves = PathCurves::build(&arc_set(), &options).unwrap();
        assert_eq!(curves.fine().position.points().len(), 201);
        assert_eq!(curves.fine().target.points().len(), 201);
        assert_eq!(curves.coarse().position.points().len(), 5);
    }

    #[test]
    fn fine_pair_tracks_coarse_pair() {
        let set = KeyframeSet::showcase();
        let curves = PathCurves::build(&set, &PathOptions::default()).unwrap();
        for i in 0..=50 {
            let t = i as f32 / 50.0;
            let (cp, ct) = curves.coarse().sample_at(t).unwrap();
            let (fp, ft) = curves.fine().sample_at(t).unwrap();
            assert!((cp - fp).length() < 1e-2, "position at t={t}");
            assert!((ct - ft).length() < 1e-2, "target at t={t}");
        }
    }

    #[test]
    fn mode_selects_pair() {
        let curves =
            PathCurves::build(&arc_set(), &PathOptions::default()).unwrap();
        assert_eq!(
            curves.pair(PlaybackMode::Snap).position.points().len(),
            5
        );
        assert_eq!(
            curves.pair(PlaybackMode::Cinematic).position.points().len(),
            1501
        );
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let options = PathOptions {
            resolution: 0,
            ..PathOptions::default()
        };
        assert!(PathCurves::build(&arc_set(), &options).is_err());
    }

    #[test]
    fn remembers_source_keyframes() {
        let set = arc_set();
        let curves = PathCurves::build(&set, &PathOptions::default()).unwrap();
        assert!(curves.matches(&set));
        assert!(!curves.matches(&KeyframeSet::showcase()));
    }

    #[test]
    fn equal_fingerprints_still_compare_geometry() {
        let mut curves =
            PathCurves::build(&arc_set(), &PathOptions::default()).unwrap();
        let other = KeyframeSet::showcase();
        curves.fingerprint = other.fingerprint();
        assert!(!curves.matches(&other));
    }

    #[test]
    fn nan_keyframes_match_themselves() {
        let mut keyframes: Vec<Keyframe> = arc_set().iter().cloned().collect();
        keyframes[4].position = Vec3::NAN;
        let set = KeyframeSet::new(keyframes).unwrap();
        let curves = PathCurves::build(&set, &PathOptions::default()).unwrap();
        assert!(curves.matches(&set));
    }

    #[test]
    fn nan_keyframe_keeps_fine_aligned_with_coarse() {
        let mut keyframes: Vec<Keyframe> = (0..5)
            .map(|i| Keyframe::new(Vec3::new(i as f32, 0.0, 0.0), Vec3::ZERO))
            .collect();
        keyframes[4].position = Vec3::NAN;
        let set = KeyframeSet::new(keyframes).unwrap();
        let curves = PathCurves::build(&set, &PathOptions::default()).unwrap();

        assert_eq!(curves.fine().position.points().len(), 1501);
        let coarse = curves.coarse().position.sample_at(0.4).unwrap();
        let fine = curves.fine().position.sample_at(0.4).unwrap();
        assert!((coarse - Vec3::new(1.6, 0.0, 0.0)).length() < 1e-3);
        assert!((coarse - fine).length() < 1e-3, "{coarse:?} vs {fine:?}");
        assert!(curves.fine().sample_at(1.0).is_none());
    }
}
