//! Device-to-world transform math.

use glam::{Quat, Vec3};

use gimbal_vr::Pose;

/// Device-to-world mapping for the active scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Anchor {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// World pose of one eye for a device-space head pose.
///
/// The eye sits at a fixed offset from the head origin, rotates with the
/// head, is scaled into world units, then mapped through the anchor.
pub fn eye_world_pose(
    head: &Pose,
    eye_offset: Vec3,
    anchor: &Anchor,
    inverse_world_scale: f32,
) -> Pose {
    let eye_device = head.position + head.orientation * eye_offset;
    Pose {
        position: anchor.position + anchor.rotation * (eye_device * inverse_world_scale),
        orientation: anchor.rotation * head.orientation,
    }
}

/// World pose of the head itself (zero eye offset).
pub fn head_world_pose(head: &Pose, anchor: &Anchor, inverse_world_scale: f32) -> Pose {
    eye_world_pose(head, Vec3::ZERO, anchor, inverse_world_scale)
}

/// Step `from` toward `to` by at most `max_step` without overshooting.
pub fn move_toward(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= max_step || distance <= f32::EPSILON {
        to
    } else {
        from + delta * (max_step / distance)
    }
}
