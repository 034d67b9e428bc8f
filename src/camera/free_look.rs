//! Pointer-driven look-at offset.
//!
//! The offset lives in a view frame built from the current view direction:
//! horizontal pointer motion slides the target along the camera's right
//! vector and vertical motion along the camera's up vector. Only the target
//! moves, so free-look pivots the view without translating the camera.

use glam::{Vec2, Vec3};

use crate::options::FreeLookOptions;

/// World units of offset at full pointer deflection.
pub const DEFAULT_SENSITIVITY: f32 = 3.0;
/// Blend rate per second toward the desired offset.
pub const DEFAULT_BLEND_RATE: f32 = 5.0;

/// Current look-at offset, carried across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FreeLookState {
    /// Offset added to the look-at target.
    pub offset: Vec3,
}

/// Orthonormal frame around a view direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    /// Unit direction from camera to target.
    pub forward: Vec3,
    /// Unit vector to the right of the view.
    pub right: Vec3,
    /// Unit vector completing the frame, above the view.
    pub up: Vec3,
}

impl ViewBasis {
    /// Frame for a camera at `position` looking at `target`.
    ///
    /// `None` when the two points coincide or the view is parallel to
    /// `world_up`.
    pub fn new(position: Vec3, target: Vec3, world_up: Vec3) -> Option<Self> {
        let forward = (target - position).try_normalize()?;
        let right = forward.cross(world_up).try_normalize()?;
        let up = right.cross(forward).try_normalize()?;
        Some(Self { forward, right, up })
    }
}

/// Maps pointer input to a smoothed look-at offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeLook {
    /// World units of offset at full pointer deflection.
    pub sensitivity: f32,
    /// Blend rate per second; the per-frame weight is `delta_time × rate`.
    pub blend_rate: f32,
    /// World vertical axis.
    pub world_up: Vec3,
}

impl Default for FreeLook {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            blend_rate: DEFAULT_BLEND_RATE,
            world_up: Vec3::Y,
        }
    }
}

impl FreeLook {
    /// Engine configured from `options`.
    pub fn from_options(options: &FreeLookOptions) -> Self {
        Self {
            sensitivity: options.sensitivity,
            blend_rate: options.blend_rate,
            world_up: Vec3::Y,
        }
    }

    /// Offset the pointer asks for this frame.
    ///
    /// Pointer components are clamped to `[-1, 1]`. A degenerate view frame
    /// yields no offset.
    pub fn desired_offset(
        &self,
        position: Vec3,
        target: Vec3,
        pointer: Vec2,
    ) -> Vec3 {
        let Some(basis) = ViewBasis::new(position, target, self.world_up)
        else {
            return Vec3::ZERO;
        };
        let pointer = pointer.clamp(Vec2::NEG_ONE, Vec2::ONE);
        basis.right * (pointer.x * self.sensitivity)
            + basis.up * (pointer.y * self.sensitivity)
    }

    /// Advance `state` one frame.
    ///
    /// When `enabled`, the offset approaches the pointer-derived offset;
    /// otherwise it decays toward zero. Either way the blend weight is
    /// `delta_time × blend_rate`, clamped to `[0, 1]`.
    pub fn update(
        &self,
        state: FreeLookState,
        position: Vec3,
        target: Vec3,
        pointer: Vec2,
        delta_time: f32,
        enabled: bool,
    ) -> FreeLookState {
        let goal = if enabled {
            self.desired_offset(position, target, pointer)
        } else {
            Vec3::ZERO
        };
        let weight = delta_time * self.blend_rate;
        let weight = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        FreeLookState {
            offset: state.offset.lerp(goal, weight),
        }
    }
}
