//! Scene transform resolution.
//!
//! Converts a sampled head pose (device space) into per-eye world-space
//! camera transforms according to the active scene's policy. Each scene
//! kind is one [`ScenePolicy`] variant, keeping its setup, per-frame
//! update, and teardown co-located.

pub mod editor;
pub mod eva;
pub mod menu;
pub mod transform;
pub mod vehicle;

pub use transform::{eye_world_pose, head_world_pose, move_toward, Anchor};

use glam::{Mat4, Vec3};
use tracing::{info, warn};

use gimbal_host::{CameraHandle, CameraRig, InputSource};
use gimbal_vr::{Eye, HmdDescriptor, Pose, RuntimeGateway, TrackingOrigin};

use crate::{CoreError, CoreResult};

/// Fixed set of scene kinds the resolver recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneId {
    MainMenu,
    VehicleInterior,
    Extravehicular,
    Editor,
}

impl SceneId {
    /// Parse a host scene tag. An unknown tag means the host and this crate
    /// disagree about the scene vocabulary; scene setup aborts rather than
    /// applying an undefined transform policy.
    pub fn from_tag(tag: &str) -> CoreResult<Self> {
        match tag {
            "main-menu" => Ok(Self::MainMenu),
            "vehicle-interior" => Ok(Self::VehicleInterior),
            "extravehicular" => Ok(Self::Extravehicular),
            "editor" => Ok(Self::Editor),
            other => Err(CoreError::UnrecognizedScene(other.to_string())),
        }
    }
}

/// Per-frame data handed to a policy's anchor update.
pub struct SceneFrame<'a> {
    /// Device-space head pose sampled this frame.
    pub head: Pose,
    /// Seconds since the previous frame.
    pub dt: f32,
    pub input: &'a dyn InputSource,
    pub gateway: &'a mut dyn RuntimeGateway,
}

/// Scene-specific anchor and camera policy, one concrete variant per scene
/// kind.
pub trait ScenePolicy {
    fn id(&self) -> SceneId;

    /// Logical camera names this scene drives.
    fn camera_names(&self) -> &'static [&'static str];

    /// World units per device-space meter.
    fn world_scale(&self) -> f32 {
        1.0
    }

    fn tracking_origin(&self) -> TrackingOrigin;

    /// Hook after the context is constructed.
    fn setup(&mut self, _ctx: &mut SceneContext) {}

    /// Evolve the anchor for this frame, before the eye transforms are
    /// taken from it.
    fn update_anchor(&mut self, ctx: &mut SceneContext, frame: &mut SceneFrame<'_>);

    /// Hook before the context is torn down.
    fn teardown(&mut self, _ctx: &mut SceneContext) {}
}

/// Construct the policy for a scene kind.
pub fn policy_for(id: SceneId) -> Box<dyn ScenePolicy> {
    match id {
        SceneId::MainMenu => Box::new(menu::MenuScene),
        SceneId::VehicleInterior => Box::new(vehicle::VehicleScene),
        SceneId::Extravehicular => Box::new(eva::EvaScene),
        SceneId::Editor => Box::new(editor::EditorScene),
    }
}

/// One logical camera the scene drives.
#[derive(Debug, Clone)]
pub struct CameraBinding {
    pub name: &'static str,
    /// `None` when the host had no camera by this name at setup. Such a
    /// binding is skipped every frame, never retried.
    pub handle: Option<CameraHandle>,
    original_projection: Option<Mat4>,
    /// Per-eye HMD projections, filled in once the descriptor is known.
    /// The render layer switches between them mid-frame.
    pub hmd_projections: Option<[Mat4; 2]>,
}

/// Mutable per-scene state. Reconstructed on every scene transition, so a
/// new scene never inherits a stale anchor or scale.
pub struct SceneContext {
    pub id: SceneId,
    /// Anchor captured at setup, immutable until the scene is set up again.
    pub initial_anchor: Anchor,
    /// Live anchor; policies may move it each frame.
    pub anchor: Anchor,
    /// Menu glide destination, world space. Defaults to the initial anchor
    /// position.
    pub glide_target: Vec3,
    pub inverse_world_scale: f32,
    pub bindings: Vec<CameraBinding>,
    /// Head world pose resolved this frame, for cameras and ray casting.
    pub head_world: Pose,
    /// Per-eye world poses resolved this frame.
    pub eye_world: [Pose; 2],
    projections_applied: bool,
}

impl SceneContext {
    /// Resolve declared camera bindings once and capture the scene anchor.
    pub fn setup(
        policy: &dyn ScenePolicy,
        anchor: Anchor,
        rig: &mut dyn CameraRig,
        descriptor: Option<&HmdDescriptor>,
    ) -> Self {
        let mut bindings = Vec::with_capacity(policy.camera_names().len());
        for name in policy.camera_names() {
            match rig.find_camera(name) {
                Some(handle) => bindings.push(CameraBinding {
                    name,
                    handle: Some(handle),
                    original_projection: Some(rig.projection(handle)),
                    hmd_projections: None,
                }),
                None => {
                    warn!(camera = name, "camera not found, binding disabled");
                    bindings.push(CameraBinding {
                        name,
                        handle: None,
                        original_projection: None,
                        hmd_projections: None,
                    });
                }
            }
        }
        let mut ctx = Self {
            id: policy.id(),
            initial_anchor: anchor,
            anchor,
            glide_target: anchor.position,
            inverse_world_scale: policy.world_scale().recip(),
            bindings,
            head_world: Pose::IDENTITY,
            eye_world: [Pose::IDENTITY; 2],
            projections_applied: false,
        };
        if let Some(descriptor) = descriptor {
            ctx.apply_projections(rig, descriptor);
        }
        info!(scene = ?ctx.id, cameras = ctx.bindings.len(), "scene set up");
        ctx
    }

    /// Swap each bound camera onto the HMD projections. Idempotent; runs
    /// again once the runtime comes up if the descriptor was unknown at
    /// setup time.
    pub fn apply_projections(&mut self, rig: &mut dyn CameraRig, descriptor: &HmdDescriptor) {
        if self.projections_applied {
            return;
        }
        for binding in &mut self.bindings {
            let Some(handle) = binding.handle else {
                continue;
            };
            binding.hmd_projections = Some(descriptor.eye_projections);
            rig.set_projection(handle, descriptor.eye_projection(Eye::Left));
        }
        self.projections_applied = true;
    }

    /// Map the sampled head pose through the anchor, per eye.
    pub fn resolve(&mut self, head: &Pose, descriptor: &HmdDescriptor) {
        self.head_world = head_world_pose(head, &self.anchor, self.inverse_world_scale);
        for eye in Eye::BOTH {
            self.eye_world[eye.index()] = eye_world_pose(
                head,
                descriptor.eye_offset(eye),
                &self.anchor,
                self.inverse_world_scale,
            );
        }
    }

    /// Push the resolved head pose to every present camera binding.
    pub fn apply_cameras(&self, rig: &mut dyn CameraRig) {
        for binding in &self.bindings {
            let Some(handle) = binding.handle else {
                continue;
            };
            rig.set_transform(handle, self.head_world.position, self.head_world.orientation);
        }
    }

    /// Restore every bound camera to its original projection and enabled
    /// state.
    pub fn teardown(&mut self, rig: &mut dyn CameraRig) {
        for binding in &self.bindings {
            let Some(handle) = binding.handle else {
                continue;
            };
            if let Some(original) = binding.original_projection {
                rig.set_projection(handle, original);
            }
            rig.set_enabled(handle, true);
        }
        info!(scene = ?self.id, "scene torn down");
    }
}
