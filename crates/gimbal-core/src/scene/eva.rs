//! Extravehicular scene policy.

use gimbal_vr::TrackingOrigin;

use super::{SceneContext, SceneFrame, SceneId, ScenePolicy};

/// Outside the vehicle the anchor is still pinned: the suit's reference
/// frame follows the vessel, not the player's head.
#[derive(Debug, Default)]
pub struct EvaScene;

impl ScenePolicy for EvaScene {
    fn id(&self) -> SceneId {
        SceneId::Extravehicular
    }

    fn camera_names(&self) -> &'static [&'static str] {
        &["flight-camera", "far-camera"]
    }

    fn tracking_origin(&self) -> TrackingOrigin {
        TrackingOrigin::Standing
    }

    fn update_anchor(&mut self, ctx: &mut SceneContext, _frame: &mut SceneFrame<'_>) {
        ctx.anchor = ctx.initial_anchor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Anchor, SceneContext};
    use crate::testutil::{scene_frame, RecordingRig, ScriptedInput};
    use gimbal_vr::{DummyGateway, Pose, RuntimeGateway as _};
    use glam::{Quat, Vec3};

    #[test]
    fn test_anchor_pinned_after_drift_attempt() {
        let mut policy = EvaScene;
        let mut rig = RecordingRig::with_cameras(policy.camera_names());
        let initial = Anchor::new(Vec3::new(0.0, 10.0, 0.0), Quat::IDENTITY);
        let mut ctx = SceneContext::setup(&policy, initial, &mut rig, None);

        ctx.anchor.position += Vec3::splat(4.0);

        let input = ScriptedInput::new();
        let mut gateway = DummyGateway::new();
        gateway.initialize().unwrap();
        let mut frame = scene_frame(Pose::IDENTITY, &input, &mut gateway);
        policy.update_anchor(&mut ctx, &mut frame);

        assert_eq!(ctx.anchor, initial);
    }
}
