//! Main-menu scene policy.

use gimbal_vr::TrackingOrigin;

use super::{move_toward, SceneContext, SceneFrame, SceneId, ScenePolicy};

/// Maximum anchor glide per frame toward the vantage point, world units.
pub const MENU_GLIDE_STEP: f32 = 0.05;

/// Rotation stays pinned to the scene's initial rotation while the position
/// glides toward [`SceneContext::glide_target`] instead of snapping.
#[derive(Debug, Default)]
pub struct MenuScene;

impl ScenePolicy for MenuScene {
    fn id(&self) -> SceneId {
        SceneId::MainMenu
    }

    fn camera_names(&self) -> &'static [&'static str] {
        &["main-camera", "ui-camera"]
    }

    fn tracking_origin(&self) -> TrackingOrigin {
        TrackingOrigin::Seated
    }

    fn update_anchor(&mut self, ctx: &mut SceneContext, _frame: &mut SceneFrame<'_>) {
        ctx.anchor.rotation = ctx.initial_anchor.rotation;
        ctx.anchor.position = move_toward(ctx.anchor.position, ctx.glide_target, MENU_GLIDE_STEP);
    }
}
