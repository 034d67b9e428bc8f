//! Camera composition for the keyframed flythrough.
//!
//! [`CameraRig`] turns per-frame progress, pointer and reference spin into a
//! camera pose; the remaining modules hold the stages it runs and the render
//! camera it writes to.

/// Yaw compensation for a rotating reference object.
pub mod compensate;
/// Render camera and GPU uniform types.
pub mod core;
/// Pointer-driven look-at offset.
pub mod free_look;
/// Spin of the object the path is anchored to.
pub mod reference;
/// Per-frame pose composition.
pub mod rig;

pub use compensate::compensate;
pub use core::{Camera, CameraUniform};
pub use free_look::{FreeLook, FreeLookState, ViewBasis};
pub use reference::ReferenceSpin;
pub use rig::{CameraPose, CameraRig, FrameInput, FrameOutput, RigState};
