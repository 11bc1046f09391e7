//! Per-frame VR pipeline for Gimbal.
//!
//! Five pieces run in a fixed order each frame: the event dispatcher drains
//! the runtime queue, the lifecycle state machine advances (possibly
//! attempting (re)initialization), the pose sampler fetches the freshest
//! device poses, the scene resolver maps them into world-space camera
//! transforms, and the frame is submitted to the render backend. The host
//! drives all of it through [`VrSystem::tick`].

#![forbid(unsafe_code)]

pub mod events;
pub mod lifecycle;
pub mod locomotion;
pub mod sampler;
pub mod scene;
pub mod system;

#[cfg(test)]
pub(crate) mod testutil;

pub use events::{EventBus, EventSink};
pub use lifecycle::{Lifecycle, LifecycleState, RETRY_COOLDOWN};
pub use sampler::{FrameSampler, PoseListener};
pub use scene::{Anchor, CameraBinding, SceneContext, SceneFrame, SceneId, ScenePolicy};
pub use system::VrSystem;

use thiserror::Error;

/// Errors the pipeline surfaces to the host.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The host named a scene this crate does not know: a host/core version
    /// mismatch, never a runtime condition.
    #[error("unrecognized scene tag: {0}")]
    UnrecognizedScene(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
