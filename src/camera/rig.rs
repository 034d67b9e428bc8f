//! Per-frame camera composition along the keyframe path.

use std::sync::Arc;

use glam::{Vec2, Vec3};
use serde::Serialize;

use super::compensate::compensate;
use super::core::{Camera, CameraUniform};
use super::free_look::{FreeLook, FreeLookState};
use crate::error::FlypathError;
use crate::options::Options;
use crate::path::{Keyframe, KeyframeSet, PathCurves};
use crate::playback::{
    step_index, Cinematic, PlaybackMode, SmoothingState, SmoothingStrategy,
    Snap,
};
use crate::Result;

/// Camera placement for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose at an authored keyframe.
    pub fn from_keyframe(keyframe: &Keyframe) -> Self {
        Self {
            position: keyframe.position,
            look_at: keyframe.target,
        }
    }

    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }
}

/// Everything the rig consumes in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Normalized progress, nominally in `[0, 1]`; out-of-range values are
    /// tolerated and clamped when sampling.
    pub raw_progress: f32,
    /// Normalized pointer position, each component in `[-1, 1]`.
    pub pointer: Vec2,
    /// Playback mode for this frame.
    pub mode: PlaybackMode,
    /// Whether pointer free-look is active.
    pub free_look_enabled: bool,
    /// Current yaw of the reference object; 0 when there is none.
    pub reference_yaw: f32,
    /// Seconds since the previous frame.
    pub delta_time: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            raw_progress: 0.0,
            pointer: Vec2::ZERO,
            mode: PlaybackMode::default(),
            free_look_enabled: false,
            reference_yaw: 0.0,
            delta_time: 1.0 / 60.0,
        }
    }
}

impl FrameInput {
    /// Input at `raw_progress` in `mode` with no pointer, spin or free-look.
    pub fn at(raw_progress: f32, mode: PlaybackMode) -> Self {
        Self {
            raw_progress,
            mode,
            ..Self::default()
        }
    }
}

/// What the rig produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameOutput {
    /// Pose written to the render camera.
    pub pose: CameraPose,
    /// Step index derived from raw progress, for the overlay.
    pub step: usize,
    /// Curve parameter sampled this frame.
    pub effective_t: f32,
    /// True when sampling failed and the previous pose was kept.
    pub held: bool,
}

/// State carried between frames. Each field is written once per frame by
/// the stage that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RigState {
    /// Smoothed curve parameter.
    pub smoothing: SmoothingState,
    /// Current free-look offset.
    pub free_look: FreeLookState,
    /// Last successfully composed pose.
    pub last_pose: Option<CameraPose>,
}

/// Drives the render camera along the keyframe path.
///
/// Each [`update`](Self::update) runs the stages in a fixed order: step
/// index, smoothing, curve sampling, rotation compensation, free-look,
/// camera write. Later stages work in the frame produced by earlier ones.
pub struct CameraRig {
    keyframes: KeyframeSet,
    curves: Arc<PathCurves>,
    options: Options,
    snap: Snap,
    cinematic: Cinematic,
    free_look: FreeLook,
    state: RigState,
    camera: Camera,
}

impl CameraRig {
    /// Build the path for `keyframes` and place the camera at the first
    /// keyframe.
    pub fn new(keyframes: KeyframeSet, options: Options) -> Result<Self> {
        options.validate()?;
        let curves = Arc::new(PathCurves::build(&keyframes, &options.path)?);
        Ok(Self::assemble(keyframes, curves, options))
    }

    /// Rig sampling curves already built for `keyframes`, typically shared
    /// with another rig.
    pub fn with_curves(
        keyframes: KeyframeSet,
        curves: Arc<PathCurves>,
        options: Options,
    ) -> Result<Self> {
        options.validate()?;
        if !curves.matches(&keyframes) {
            return Err(FlypathError::InvalidOption(
                "curves were built from a different keyframe set".to_owned(),
            ));
        }
        Ok(Self::assemble(keyframes, curves, options))
    }

    fn assemble(
        keyframes: KeyframeSet,
        curves: Arc<PathCurves>,
        options: Options,
    ) -> Self {
        let start = CameraPose::from_keyframe(keyframes.first());
        Self {
            cinematic: Cinematic::new(
                options.playback.cinematic_factor,
                options.playback.clock,
            ),
            snap: Snap,
            free_look: FreeLook::from_options(&options.free_look),
            camera: Camera::new(&start, &options.camera),
            state: RigState::default(),
            keyframes,
            curves,
            options,
        }
    }

    /// Replace the keyframe set.
    ///
    /// Curves are rebuilt only when the geometry differs from the current
    /// set; returns whether a rebuild happened. Frame state is kept.
    pub fn set_keyframes(&mut self, keyframes: KeyframeSet) -> Result<bool> {
        let rebuilt = if self.curves.matches(&keyframes) {
            false
        } else {
            self.curves =
                Arc::new(PathCurves::build(&keyframes, &self.options.path)?);
            true
        };
        self.keyframes = keyframes;
        Ok(rebuilt)
    }

    /// Compose this frame's pose and write it to the camera.
    ///
    /// Never fails: a degenerate curve sample keeps the previous pose
    /// (initially the first keyframe) and leaves free-look untouched.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutput {
        let step = step_index(input.raw_progress, self.keyframes.len());

        let smoothing = self.strategy(input.mode).update(
            input.raw_progress,
            self.state.smoothing,
            input.delta_time,
        );
        self.state.smoothing = smoothing;
        let effective_t = smoothing.effective_t;

        let Some((raw_position, raw_target)) =
            self.curves.pair(input.mode).sample_at(effective_t)
        else {
            return self.hold(step, effective_t);
        };

        let (position, target) =
            compensate(raw_position, raw_target, input.reference_yaw);

        let free_look = self.free_look.update(
            self.state.free_look,
            position,
            target,
            input.pointer,
            input.delta_time,
            input.free_look_enabled,
        );

        let pose = CameraPose {
            position,
            look_at: target + free_look.offset,
        };
        if !pose.is_finite() {
            return self.hold(step, effective_t);
        }

        self.state.free_look = free_look;
        self.state.last_pose = Some(pose);
        self.camera.apply_pose(&pose);

        FrameOutput {
            pose,
            step,
            effective_t,
            held: false,
        }
    }

    fn hold(&self, step: usize, effective_t: f32) -> FrameOutput {
        log::debug!("Degenerate path sample at t={effective_t}, holding pose");
        FrameOutput {
            pose: self.held_pose(),
            step,
            effective_t,
            held: true,
        }
    }

    fn strategy(&self, mode: PlaybackMode) -> &dyn SmoothingStrategy {
        match mode {
            PlaybackMode::Snap => &self.snap,
            PlaybackMode::Cinematic => &self.cinematic,
        }
    }

    /// Last valid pose, or the first keyframe before any valid frame.
    pub fn held_pose(&self) -> CameraPose {
        self.state
            .last_pose
            .unwrap_or_else(|| CameraPose::from_keyframe(self.keyframes.first()))
    }

    /// Reset smoothing and free-look state and return the camera to the
    /// first keyframe.
    pub fn reset(&mut self) {
        self.state = RigState::default();
        let start = CameraPose::from_keyframe(self.keyframes.first());
        self.camera.apply_pose(&start);
    }

    /// Frame state carried between updates.
    pub fn state(&self) -> &RigState {
        &self.state
    }

    /// Overwrite the frame state, e.g. to seed smoothing.
    pub fn set_state(&mut self, state: RigState) {
        self.state = state;
    }

    /// Render camera driven by this rig.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable render camera, for projection changes such as resizes.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// GPU uniform for the current camera.
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera);
        uniform
    }

    /// Keyframes the path was built from.
    pub fn keyframes(&self) -> &KeyframeSet {
        &self.keyframes
    }

    /// Shared handle to the cached curves.
    pub fn curves(&self) -> &Arc<PathCurves> {
        &self.curves
    }

    /// Options the rig was configured with.
    pub fn options(&self) -> &Options {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    /// Five keyframes on a half circle around the origin.
    fn arc_set() -> KeyframeSet {
        let keyframes = (0..5)
            .map(|i| {
                let angle = PI * i as f32 / 4.0;
                Keyframe::new(
                    Vec3::new(4.0 * angle.cos(), 1.5, 4.0 * angle.sin()),
                    Vec3::new(0.0, 0.5, 0.0),
                )
            })
            .collect();
        KeyframeSet::new(keyframes).unwrap()
    }

    fn rig() -> CameraRig {
        CameraRig::new(arc_set(), Options::default()).unwrap()
    }

    #[test]
    fn snap_midpoint_matches_coarse_curve() {
        let mut rig = rig();
        let out = rig.update(&FrameInput::at(0.5, PlaybackMode::Snap));
        let expected = rig.curves().coarse().position.sample_at(0.5).unwrap();
        assert_eq!(out.pose.position, expected);
        assert_eq!(out.step, 2);
        assert!(!out.held);
        assert_eq!(rig.camera().eye, expected);
    }

    #[test]
    fn cinematic_jump_moves_one_smoothing_step() {
        let mut rig = rig();
        let out = rig.update(&FrameInput::at(1.0, PlaybackMode::Cinematic));
        assert_eq!(out.effective_t, 0.05);
        assert_eq!(rig.state().smoothing.effective_t, 0.05);
        // The overlay already reflects the raw progress.
        assert_eq!(out.step, 4);
        let expected = rig.curves().fine().position.sample_at(0.05).unwrap();
        assert_eq!(out.pose.position, expected);
    }

    #[test]
    fn snap_steps_never_go_backwards() {
        let mut rig = rig();
        let mut previous = 0;
        for i in 0..=200 {
            let t = i as f32 / 200.0;
            let out = rig.update(&FrameInput::at(t, PlaybackMode::Snap));
            assert!(out.step >= previous);
            previous = out.step;
        }
        assert_eq!(previous, 4);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let mut rig = rig();
        let end = arc_set().positions()[4];
        let out = rig.update(&FrameInput::at(1.4, PlaybackMode::Snap));
        assert!((out.pose.position - end).length() < 1e-3);
        assert_eq!(out.step, 4);
        let out = rig.update(&FrameInput::at(-0.3, PlaybackMode::Snap));
        assert!((out.pose.position - arc_set().positions()[0]).length() < 1e-3);
        assert_eq!(out.step, 0);
    }

    #[test]
    fn rotation_applies_to_position_and_target() {
        let mut rig = rig();
        let input = FrameInput {
            reference_yaw: PI / 2.0,
            ..FrameInput::at(0.0, PlaybackMode::Snap)
        };
        let out = rig.update(&input);
        // (4, 1.5, 0) rotated a quarter turn about +Y.
        assert!((out.pose.position - Vec3::new(0.0, 1.5, -4.0)).length() < 1e-3);
        assert!((out.pose.look_at - Vec3::new(0.0, 0.5, 0.0)).length() < 1e-3);
    }

    #[test]
    fn free_look_moves_only_the_target() {
        let mut rig = rig();
        let plain = rig.update(&FrameInput::at(0.5, PlaybackMode::Snap));
        let input = FrameInput {
            pointer: Vec2::new(1.0, 1.0),
            free_look_enabled: true,
            ..FrameInput::at(0.5, PlaybackMode::Snap)
        };
        let mut out = rig.update(&input);
        for _ in 0..120 {
            out = rig.update(&input);
        }
        assert_eq!(out.pose.position, plain.pose.position);
        let shift = out.pose.look_at - plain.pose.look_at;
        // Full deflection on both axes: 3 units along each basis vector.
        assert!((shift.length() - 3.0 * 2.0_f32.sqrt()).abs() < 1e-2);

        // Releasing free-look eases the target back.
        let release = FrameInput::at(0.5, PlaybackMode::Snap);
        for _ in 0..600 {
            out = rig.update(&release);
        }
        assert!((out.pose.look_at - plain.pose.look_at).length() < 1e-3);
    }

    #[test]
    fn degenerate_samples_hold_the_last_pose() {
        let mut rig = rig();
        let good = rig.update(&FrameInput::at(0.25, PlaybackMode::Snap));
        let out = rig.update(&FrameInput::at(f32::NAN, PlaybackMode::Snap));
        assert!(out.held);
        assert_eq!(out.pose, good.pose);
        assert_eq!(rig.camera().eye, good.pose.position);
    }

    #[test]
    fn first_frame_failure_holds_first_keyframe() {
        let mut rig = rig();
        let out = rig.update(&FrameInput::at(f32::NAN, PlaybackMode::Snap));
        assert!(out.held);
        assert_eq!(out.pose.position, arc_set().positions()[0]);
    }

    #[test]
    fn nan_keyframe_is_survivable() {
        let mut keyframes: Vec<Keyframe> = arc_set().iter().cloned().collect();
        keyframes[4].position = Vec3::NAN;
        let set = KeyframeSet::new(keyframes).unwrap();
        let mut rig = CameraRig::new(set, Options::default()).unwrap();
        let early = rig.update(&FrameInput::at(0.1, PlaybackMode::Snap));
        assert!(!early.held);
        let late = rig.update(&FrameInput::at(1.0, PlaybackMode::Snap));
        assert!(late.held);
        assert_eq!(late.pose, early.pose);
    }

    #[test]
    fn nan_keyframe_holds_in_cinematic_mode() {
        let mut keyframes: Vec<Keyframe> = arc_set().iter().cloned().collect();
        keyframes[4].position = Vec3::NAN;
        let set = KeyframeSet::new(keyframes).unwrap();
        let mut rig = CameraRig::new(set, Options::default()).unwrap();

        let settle = FrameInput::at(0.4, PlaybackMode::Cinematic);
        let mut out = rig.update(&settle);
        for _ in 0..300 {
            out = rig.update(&settle);
        }
        assert!(!out.held);
        // The fine curve still lines up with the coarse one at the same t.
        let coarse = rig
            .curves()
            .coarse()
            .position
            .sample_at(out.effective_t)
            .unwrap();
        assert!((out.pose.position - coarse).length() < 1e-2);

        let mut last_good = out.pose;
        let end = FrameInput::at(1.0, PlaybackMode::Cinematic);
        for _ in 0..300 {
            out = rig.update(&end);
            if !out.held {
                last_good = out.pose;
            }
        }
        assert!(out.held);
        assert!(out.effective_t > 0.9);
        assert_eq!(out.pose, last_good);
        assert_eq!(rig.state().last_pose, Some(last_good));
    }

    #[test]
    fn mode_switch_keeps_smoothed_progress() {
        let mut rig = rig();
        for _ in 0..20 {
            let _ = rig.update(&FrameInput::at(1.0, PlaybackMode::Cinematic));
        }
        let lagging = rig.state().smoothing.effective_t;
        assert!(lagging > 0.0 && lagging < 1.0);

        let snapped = rig.update(&FrameInput::at(1.0, PlaybackMode::Snap));
        assert_eq!(snapped.effective_t, 1.0);
        let resumed = rig.update(&FrameInput::at(0.0, PlaybackMode::Cinematic));
        assert!((resumed.effective_t - 0.95).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_the_start() {
        let mut rig = rig();
        let _ = rig.update(&FrameInput::at(0.8, PlaybackMode::Snap));
        rig.reset();
        assert_eq!(*rig.state(), RigState::default());
        assert_eq!(rig.camera().eye, arc_set().positions()[0]);
    }

    #[test]
    fn curves_rebuild_only_for_new_geometry() {
        let mut rig = rig();
        let before = Arc::clone(rig.curves());

        let mut relabeled: Vec<Keyframe> = arc_set().iter().cloned().collect();
        relabeled[1].label = "SIDE".to_owned();
        let rebuilt =
            rig.set_keyframes(KeyframeSet::new(relabeled).unwrap()).unwrap();
        assert!(!rebuilt);
        assert!(Arc::ptr_eq(&before, rig.curves()));

        let rebuilt = rig.set_keyframes(KeyframeSet::showcase()).unwrap();
        assert!(rebuilt);
        assert!(!Arc::ptr_eq(&before, rig.curves()));
        assert_eq!(rig.keyframes().len(), 9);
    }

    #[test]
    fn shared_curves_must_match_keyframes() {
        let rig = rig();
        let shared = Arc::clone(rig.curves());
        assert!(CameraRig::with_curves(
            arc_set(),
            Arc::clone(&shared),
            Options::default()
        )
        .is_ok());
        assert!(CameraRig::with_curves(
            KeyframeSet::showcase(),
            shared,
            Options::default()
        )
        .is_err());
    }

    #[test]
    fn uniform_follows_the_camera() {
        let mut rig = rig();
        let out = rig.update(&FrameInput::at(0.5, PlaybackMode::Snap));
        let uniform = rig.uniform();
        assert_eq!(uniform.position, out.pose.position.to_array());
    }
}
