//! Device-side abstraction for Gimbal.
//!
//! Defines the pose value types, the [`RuntimeGateway`] trait that wraps the
//! native VR runtime, the runtime event vocabulary, and a scriptable
//! [`DummyGateway`] for tests and headless hosts.

#![forbid(unsafe_code)]

pub mod dummy;
pub mod event;
pub mod gateway;
pub mod types;

pub use dummy::DummyGateway;
pub use event::RuntimeEvent;
pub use gateway::{RuntimeGateway, MAX_EVENTS_PER_POLL};
pub use types::{
    DeviceClass, Eye, FramePoses, HmdDescriptor, Pose, PoseSnapshot, TrackedPose, TrackingOrigin,
    HMD_DEVICE_INDEX, MAX_TRACKED_DEVICES,
};

use thiserror::Error;

/// Errors surfaced by a [`RuntimeGateway`].
///
/// The first four are initialization failures, recovered by the lifecycle
/// state machine. `PoseQuery` is raised during frame sampling and is
/// fatal-for-session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// No head-mounted display is connected.
    #[error("no head-mounted display detected")]
    DeviceNotPresent,
    /// The companion runtime service is not installed on this machine.
    #[error("VR runtime is not installed")]
    RuntimeNotInstalled,
    /// The host's active graphics backend is not one the runtime supports.
    #[error("active graphics backend is not supported by the VR runtime")]
    UnsupportedGraphicsBackend,
    /// Any other native initialization failure, with the native error code.
    #[error("native runtime initialization failed (code {0})")]
    NativeInit(i32),
    /// The per-frame pose query failed.
    #[error("pose query failed: {0}")]
    PoseQuery(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
