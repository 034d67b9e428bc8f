//! Rotation of sampled path points with a spinning reference object.

use glam::{Quat, Vec3};

/// Rotate `position` and `target` about the world vertical axis by `yaw`
/// radians.
///
/// Both points get the same rotation, so the view direction keeps its shape
/// relative to the reference object. Pass `yaw = 0` when there is no
/// reference object.
pub fn compensate(position: Vec3, target: Vec3, yaw: f32) -> (Vec3, Vec3) {
    if yaw == 0.0 {
        return (position, target);
    }
    let rotation = Quat::from_rotation_y(yaw);
    (rotation * position, rotation * target)
}
