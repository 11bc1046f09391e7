//! The per-frame orchestrator.

use std::time::Instant;

use glam::Vec3;
use tracing::{error, info};

use gimbal_common::VrConfig;
use gimbal_host::{CameraRig, EyeTarget, InputSource, RenderBackend, TextureBounds};
use gimbal_vr::{HmdDescriptor, RuntimeGateway};

use crate::events::{self, EventBus, EventSink};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::sampler::{FrameSampler, PoseListener};
use crate::scene::{self, Anchor, SceneContext, SceneFrame, SceneId, ScenePolicy};
use crate::CoreResult;

/// Owns the whole pipeline: gateway, render backend, lifecycle, sampler,
/// event bus, and the active scene. Constructed once at startup and handed
/// to the host's render loop; [`tick`] is the single per-frame entry point.
///
/// [`tick`]: VrSystem::tick
pub struct VrSystem {
    gateway: Box<dyn RuntimeGateway>,
    backend: Box<dyn RenderBackend>,
    /// Opaque per-eye texture handles owned by the rendering layer, left
    /// then right.
    eye_target_handles: [u64; 2],
    lifecycle: Lifecycle,
    sampler: FrameSampler,
    bus: EventBus,
    descriptor: Option<HmdDescriptor>,
    scene: Option<(Box<dyn ScenePolicy>, SceneContext)>,
}

impl VrSystem {
    pub fn new(
        config: &VrConfig,
        mut gateway: Box<dyn RuntimeGateway>,
        backend: Box<dyn RenderBackend>,
        eye_target_handles: [u64; 2],
    ) -> Self {
        let mut lifecycle = Lifecycle::new();
        if config.auto_enable {
            lifecycle.set_enabled(true, gateway.as_mut());
        }
        Self {
            gateway,
            backend,
            eye_target_handles,
            lifecycle,
            sampler: FrameSampler::new(),
            bus: EventBus::new(),
            descriptor: None,
            scene: None,
        }
    }

    /// External VR enable/disable. Disabling while running shuts the
    /// runtime down before returning.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.lifecycle.set_enabled(enabled, self.gateway.as_mut());
    }

    pub fn is_enabled(&self) -> bool {
        self.lifecycle.is_enabled()
    }

    /// True only while the runtime is up and poses are flowing.
    pub fn hmd_active(&self) -> bool {
        self.lifecycle.is_running()
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn descriptor(&self) -> Option<&HmdDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn scene(&self) -> Option<&SceneContext> {
        self.scene.as_ref().map(|(_, ctx)| ctx)
    }

    pub fn subscribe_events(&mut self, sink: Box<dyn EventSink>) {
        self.bus.subscribe(sink);
    }

    pub fn subscribe_poses(&mut self, listener: Box<dyn PoseListener>) {
        self.sampler.subscribe(listener);
    }

    /// Redirect the active scene's glide destination (menu scenes follow it
    /// at a bounded per-frame step).
    pub fn set_glide_target(&mut self, point: Vec3) {
        if let Some((_, ctx)) = &mut self.scene {
            ctx.glide_target = point;
        }
    }

    /// Tear down any active scene, then set up the one named by `tag`
    /// around its world-space anchor.
    pub fn enter_scene(
        &mut self,
        tag: &str,
        anchor: Anchor,
        rig: &mut dyn CameraRig,
    ) -> CoreResult<()> {
        let id = SceneId::from_tag(tag)?;
        self.exit_scene(rig);
        let mut policy = scene::policy_for(id);
        let mut ctx = SceneContext::setup(policy.as_ref(), anchor, rig, self.descriptor.as_ref());
        policy.setup(&mut ctx);
        if self.lifecycle.is_running() {
            self.gateway.set_tracking_origin(policy.tracking_origin());
        }
        self.scene = Some((policy, ctx));
        Ok(())
    }

    pub fn exit_scene(&mut self, rig: &mut dyn CameraRig) {
        if let Some((mut policy, mut ctx)) = self.scene.take() {
            policy.teardown(&mut ctx);
            ctx.teardown(rig);
        }
    }

    /// The per-frame hook. Invoke at end-of-frame, after all rendering and
    /// before the backend presents: event drain, lifecycle advance, pose
    /// sample, scene resolve, camera application, submission, strictly in
    /// that order within a single logical thread.
    pub fn tick(&mut self, rig: &mut dyn CameraRig, input: &dyn InputSource, dt: f32, now: Instant) {
        if self.lifecycle.is_running() {
            events::drain(self.gateway.as_mut(), &mut self.bus);
        }

        if let Some(descriptor) = self.lifecycle.tick(self.gateway.as_mut(), now) {
            self.on_runtime_ready(descriptor);
        }
        if !self.lifecycle.is_running() {
            return;
        }
        let Some(descriptor) = self.descriptor else {
            return;
        };

        // Latest safe point: all frame rendering is done, submission has
        // not happened yet. Sampling earlier would add a frame of
        // motion-to-photon latency.
        if let Err(error) = self.sampler.sample(self.gateway.as_mut()) {
            error!(%error, "pose query failed, disabling VR");
            self.lifecycle.set_enabled(false, self.gateway.as_mut());
            return;
        }

        if let Some((policy, ctx)) = &mut self.scene {
            ctx.apply_projections(rig, &descriptor);
            if let Some(hmd) = self.sampler.render_snapshot().hmd() {
                let head = hmd.pose;
                let mut frame = SceneFrame {
                    head,
                    dt,
                    input,
                    gateway: self.gateway.as_mut(),
                };
                policy.update_anchor(ctx, &mut frame);
                ctx.resolve(&head, &descriptor);
                ctx.apply_cameras(rig);
            }
        }

        // Submission strictly after pose capture.
        self.backend.submit();
    }

    fn on_runtime_ready(&mut self, descriptor: HmdDescriptor) {
        let [left, right] = self.eye_target_handles;
        let bounds = TextureBounds::FULL_FLIPPED;
        self.backend.register_targets(
            EyeTarget {
                handle: left,
                width: descriptor.target_width,
                height: descriptor.target_height,
                bounds,
            },
            EyeTarget {
                handle: right,
                width: descriptor.target_width,
                height: descriptor.target_height,
                bounds,
            },
        );
        self.descriptor = Some(descriptor);
        if let Some((policy, _)) = &self.scene {
            self.gateway.set_tracking_origin(policy.tracking_origin());
        }
        info!(
            width = descriptor.target_width,
            height = descriptor.target_height,
            "eye render targets registered"
        );
    }
}
