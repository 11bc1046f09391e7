//! The runtime gateway trait.

use crate::event::RuntimeEvent;
use crate::types::{FramePoses, HmdDescriptor, TrackingOrigin};
use crate::GatewayResult;

/// Largest event batch a single [`RuntimeGateway::poll_events`] call may
/// return. Excess events stay queued for subsequent frames so an event storm
/// cannot block the per-frame cadence.
pub const MAX_EVENTS_PER_POLL: usize = 64;

/// Thin synchronous wrapper around the native VR runtime. Owns the single
/// connection to the physical runtime.
///
/// All calls are synchronous and may block briefly, bounded by the native
/// runtime's own timeouts. No call other than [`initialize`] may be issued
/// before `initialize` succeeds, and none after [`shutdown`].
///
/// [`initialize`]: RuntimeGateway::initialize
/// [`shutdown`]: RuntimeGateway::shutdown
pub trait RuntimeGateway: Send {
    /// Connect to the runtime. Failures are non-fatal to the host process;
    /// the lifecycle state machine catches and classifies them.
    fn initialize(&mut self) -> GatewayResult<HmdDescriptor>;

    /// Disconnect. Synchronous; completes before returning.
    fn shutdown(&mut self);

    /// Drain one bounded batch of queued runtime events, at most
    /// [`MAX_EVENTS_PER_POLL`]. Finite and non-restartable per call.
    fn poll_events(&mut self) -> Vec<RuntimeEvent>;

    /// Fetch the freshest render and game-logic snapshots together.
    fn last_poses(&mut self) -> GatewayResult<FramePoses>;

    /// Re-center the runtime's zero pose at the current head position.
    fn reset_seated_origin(&mut self);

    /// Switch the runtime's calibration mode.
    fn set_tracking_origin(&mut self, origin: TrackingOrigin);
}
