//! Vehicle-interior scene policy.

use gimbal_vr::TrackingOrigin;

use super::{SceneContext, SceneFrame, SceneId, ScenePolicy};

/// The physical seat does not move relative to the player's calibrated
/// origin: the anchor is pinned to the initial anchor every frame.
#[derive(Debug, Default)]
pub struct VehicleScene;

impl ScenePolicy for VehicleScene {
    fn id(&self) -> SceneId {
        SceneId::VehicleInterior
    }

    fn camera_names(&self) -> &'static [&'static str] {
        &["flight-camera", "interior-camera"]
    }

    fn tracking_origin(&self) -> TrackingOrigin {
        TrackingOrigin::Seated
    }

    fn update_anchor(&mut self, ctx: &mut SceneContext, _frame: &mut SceneFrame<'_>) {
        ctx.anchor = ctx.initial_anchor;
    }
}
