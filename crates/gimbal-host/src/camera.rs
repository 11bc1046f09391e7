//! Camera capability.

use glam::{Mat4, Quat, Vec3};

/// Opaque handle to a host engine camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraHandle(pub u64);

/// Enumerate and drive the host's cameras by name.
///
/// Lookups happen once at scene setup; per-frame traffic is transform and
/// projection writes only.
pub trait CameraRig {
    /// Resolve a camera by its scene-local name. `None` if the host has no
    /// such camera; callers must not retry.
    fn find_camera(&mut self, name: &str) -> Option<CameraHandle>;

    fn projection(&self, camera: CameraHandle) -> Mat4;

    fn set_projection(&mut self, camera: CameraHandle, projection: Mat4);

    fn set_enabled(&mut self, camera: CameraHandle, enabled: bool);

    fn set_transform(&mut self, camera: CameraHandle, position: Vec3, rotation: Quat);
}
