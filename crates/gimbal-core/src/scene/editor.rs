//! Editor (free-roam) scene policy.

use gimbal_vr::TrackingOrigin;

use super::{SceneContext, SceneFrame, SceneId, ScenePolicy};
use crate::locomotion;

/// The one scene kind with a mutable anchor: locomotion input moves it
/// every frame.
#[derive(Debug, Default)]
pub struct EditorScene;

impl ScenePolicy for EditorScene {
    fn id(&self) -> SceneId {
        SceneId::Editor
    }

    fn camera_names(&self) -> &'static [&'static str] {
        &["editor-camera"]
    }

    fn tracking_origin(&self) -> TrackingOrigin {
        TrackingOrigin::Standing
    }

    fn update_anchor(&mut self, ctx: &mut SceneContext, frame: &mut SceneFrame<'_>) {
        locomotion::apply(
            &mut ctx.anchor,
            &frame.head,
            frame.input,
            frame.gateway,
            self.world_scale(),
            frame.dt,
        );
    }
}
