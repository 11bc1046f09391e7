//! Free-roam anchor locomotion.
//!
//! Two independent hand inputs drive the anchor in scenes where it is
//! mutable: one hand elevates, the other slides in the horizontal plane
//! relative to where the user is looking. A dedicated button on either hand
//! re-centers the runtime's calibration without touching the anchor.

use glam::Vec3;
use tracing::trace;

use gimbal_host::InputSource;
use gimbal_vr::{Pose, RuntimeGateway};

use crate::scene::Anchor;

/// Input action set the locomotion layer binds to.
pub const ACTION_SET: &str = "locomotion";
/// Right-hand vertical axis action.
pub const ELEVATE_ACTION: &str = "elevate";
/// Left-hand planar axis action.
pub const SLIDE_ACTION: &str = "slide";
/// Boolean action that re-centers the seated origin, either hand.
pub const RECENTER_ACTION: &str = "recenter";

/// Meters per second at full deflection, before world scale.
pub const VERTICAL_SPEED: f32 = 2.0;
pub const PLANAR_SPEED: f32 = 3.0;
/// Axis magnitudes below this read as rest.
pub const STICK_DEADZONE: f32 = 0.05;

/// Mutate the scene anchor from controller input.
pub fn apply(
    anchor: &mut Anchor,
    head: &Pose,
    input: &dyn InputSource,
    gateway: &mut dyn RuntimeGateway,
    world_scale: f32,
    dt: f32,
) {
    let elevate = input.axis_action(ACTION_SET, ELEVATE_ACTION);
    let slide = input.axis_action(ACTION_SET, SLIDE_ACTION);
    let recenter = input.boolean_action(ACTION_SET, RECENTER_ACTION);
    trace!(
        elevate = ?elevate.right,
        slide = ?slide.left,
        recenter_left = recenter.left,
        recenter_right = recenter.right,
        "locomotion input"
    );

    let lift = deadzone(elevate.right.y);
    if lift != 0.0 {
        let displaced = anchor.position.y + lift * VERTICAL_SPEED * world_scale * dt;
        // The anchor never sinks below the scene floor.
        anchor.position.y = displaced.max(0.0);
    }

    let stick = slide.left;
    if stick.length_squared() >= STICK_DEADZONE * STICK_DEADZONE {
        // Movement is relative to the current gaze, not a fixed world axis.
        let look = anchor.rotation * head.orientation;
        let forward = flatten(look * Vec3::NEG_Z);
        let right = flatten(look * Vec3::X);
        anchor.position += (forward * stick.y + right * stick.x) * PLANAR_SPEED * world_scale * dt;
    }

    if recenter.left || recenter.right {
        gateway.reset_seated_origin();
    }
}

/// Project onto the horizontal plane and renormalize. Zero when the vector
/// points straight up or down.
fn flatten(v: Vec3) -> Vec3 {
    let planar = Vec3::new(v.x, 0.0, v.z);
    if planar.length_squared() <= f32::EPSILON {
        Vec3::ZERO
    } else {
        planar.normalize()
    }
}

fn deadzone(value: f32) -> f32 {
    if value.abs() < STICK_DEADZONE {
        0.0
    } else {
        value
    }
}
