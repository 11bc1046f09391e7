//! Recording host doubles shared by the crate's tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use glam::{Mat4, Quat, Vec2, Vec3};

use gimbal_host::{CameraHandle, CameraRig, EyeTarget, HandPair, InputSource, RenderBackend};
use gimbal_vr::{
    DummyGateway, FramePoses, GatewayResult, HmdDescriptor, Pose, RuntimeEvent, RuntimeGateway,
    TrackingOrigin,
};

use crate::scene::SceneFrame;

/// A [`SceneFrame`] with a typical frame delta.
pub fn scene_frame<'a>(
    head: Pose,
    input: &'a dyn InputSource,
    gateway: &'a mut dyn RuntimeGateway,
) -> SceneFrame<'a> {
    SceneFrame {
        head,
        dt: 1.0 / 90.0,
        input,
        gateway,
    }
}

/// Camera rig double: a fixed set of named cameras, recording every write.
pub struct RecordingRig {
    names: HashMap<String, CameraHandle>,
    pub projections: HashMap<CameraHandle, Mat4>,
    pub transforms: HashMap<CameraHandle, (Vec3, Quat)>,
    pub enabled: HashMap<CameraHandle, bool>,
    pub lookups: Vec<String>,
}

impl RecordingRig {
    pub fn with_cameras(names: &[&str]) -> Self {
        let mut map = HashMap::new();
        let mut projections = HashMap::new();
        for (index, name) in names.iter().enumerate() {
            let handle = CameraHandle(index as u64 + 1);
            map.insert((*name).to_string(), handle);
            // Distinct original projection per camera.
            projections.insert(
                handle,
                Mat4::from_translation(Vec3::new(index as f32 + 1.0, 0.0, 0.0)),
            );
        }
        Self {
            names: map,
            projections,
            transforms: HashMap::new(),
            enabled: HashMap::new(),
            lookups: Vec::new(),
        }
    }

    pub fn handle(&self, name: &str) -> Option<CameraHandle> {
        self.names.get(name).copied()
    }
}

impl CameraRig for RecordingRig {
    fn find_camera(&mut self, name: &str) -> Option<CameraHandle> {
        self.lookups.push(name.to_string());
        self.names.get(name).copied()
    }

    fn projection(&self, camera: CameraHandle) -> Mat4 {
        self.projections
            .get(&camera)
            .copied()
            .unwrap_or(Mat4::IDENTITY)
    }

    fn set_projection(&mut self, camera: CameraHandle, projection: Mat4) {
        self.projections.insert(camera, projection);
    }

    fn set_enabled(&mut self, camera: CameraHandle, enabled: bool) {
        self.enabled.insert(camera, enabled);
    }

    fn set_transform(&mut self, camera: CameraHandle, position: Vec3, rotation: Quat) {
        self.transforms.insert(camera, (position, rotation));
    }
}

/// Input double returning scripted action states.
#[derive(Default)]
pub struct ScriptedInput {
    booleans: HashMap<(String, String), HandPair<bool>>,
    axes: HashMap<(String, String), HandPair<Vec2>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_boolean(&mut self, set: &str, name: &str, value: HandPair<bool>) {
        self.booleans.insert((set.into(), name.into()), value);
    }

    pub fn set_axis(&mut self, set: &str, name: &str, value: HandPair<Vec2>) {
        self.axes.insert((set.into(), name.into()), value);
    }
}

impl InputSource for ScriptedInput {
    fn boolean_action(&self, set: &str, name: &str) -> HandPair<bool> {
        self.booleans
            .get(&(set.to_string(), name.to_string()))
            .copied()
            .unwrap_or_default()
    }

    fn axis_action(&self, set: &str, name: &str) -> HandPair<Vec2> {
        self.axes
            .get(&(set.to_string(), name.to_string()))
            .copied()
            .unwrap_or_default()
    }
}

/// Render backend double counting registrations and submissions.
#[derive(Default)]
pub struct RecordingBackend {
    pub registered: Vec<(EyeTarget, EyeTarget)>,
    pub submissions: u32,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for RecordingBackend {
    fn register_targets(&mut self, left: EyeTarget, right: EyeTarget) {
        self.registered.push((left, right));
    }

    fn submit(&mut self) {
        self.submissions += 1;
    }
}

/// [`DummyGateway`] behind an `Arc` so a test can keep scripting and
/// inspecting it after the system takes ownership of the box.
#[derive(Clone, Default)]
pub struct SharedGateway {
    inner: Arc<Mutex<DummyGateway>>,
}

impl SharedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, DummyGateway> {
        self.inner.lock().unwrap()
    }
}

impl RuntimeGateway for SharedGateway {
    fn initialize(&mut self) -> GatewayResult<HmdDescriptor> {
        self.lock().initialize()
    }

    fn shutdown(&mut self) {
        self.lock().shutdown();
    }

    fn poll_events(&mut self) -> Vec<RuntimeEvent> {
        self.lock().poll_events()
    }

    fn last_poses(&mut self) -> GatewayResult<FramePoses> {
        self.lock().last_poses()
    }

    fn reset_seated_origin(&mut self) {
        self.lock().reset_seated_origin();
    }

    fn set_tracking_origin(&mut self, origin: TrackingOrigin) {
        self.lock().set_tracking_origin(origin);
    }
}
