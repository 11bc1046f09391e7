//! Runtime initialization state machine.
//!
//! Decouples transient hardware and runtime failures from the rest of the
//! pipeline: a failed initialization parks the machine in `Failed` and is
//! retried on a fixed cool-down for as long as VR stays enabled. This type
//! is the single writer of the state; everything else reads it.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use gimbal_vr::{HmdDescriptor, RuntimeGateway};

/// Fixed cool-down before a failed initialization is retried. The sole
/// retry policy: no exponential backoff, no retry cap.
pub const RETRY_COOLDOWN: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Initializing,
    Running,
    /// Initialization failed at `since`; eligible for retry once
    /// [`RETRY_COOLDOWN`] has elapsed.
    Failed { since: Instant },
}

pub struct Lifecycle {
    state: LifecycleState,
    enabled: bool,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            enabled: false,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flip the external VR-enabled intent. Disabling while `Running` shuts
    /// the gateway down synchronously before returning; every other state is
    /// left where it is.
    pub fn set_enabled(&mut self, enabled: bool, gateway: &mut dyn RuntimeGateway) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled && self.state == LifecycleState::Running {
            info!("VR disabled, shutting down runtime");
            gateway.shutdown();
            self.state = LifecycleState::Uninitialized;
        }
    }

    /// Advance the machine by at most one transition. Checked once per
    /// frame. Returns the HMD descriptor on the tick that reaches `Running`.
    pub fn tick(
        &mut self,
        gateway: &mut dyn RuntimeGateway,
        now: Instant,
    ) -> Option<HmdDescriptor> {
        if !self.enabled {
            return None;
        }
        match self.state {
            LifecycleState::Uninitialized => {
                self.state = LifecycleState::Initializing;
                None
            }
            LifecycleState::Initializing => match gateway.initialize() {
                Ok(descriptor) => {
                    gateway.reset_seated_origin();
                    self.state = LifecycleState::Running;
                    info!(
                        width = descriptor.target_width,
                        height = descriptor.target_height,
                        "VR runtime initialized"
                    );
                    Some(descriptor)
                }
                Err(error) => {
                    warn!(%error, "VR runtime initialization failed");
                    self.state = LifecycleState::Failed { since: now };
                    None
                }
            },
            LifecycleState::Failed { since } => {
                if now.duration_since(since) >= RETRY_COOLDOWN {
                    self.state = LifecycleState::Uninitialized;
                }
                None
            }
            LifecycleState::Running => None,
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
