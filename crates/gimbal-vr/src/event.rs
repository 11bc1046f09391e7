//! Runtime event vocabulary.

use crate::types::DeviceClass;

/// Structured events drained from the runtime each frame and re-published by
/// the event dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// The runtime routed controller input to this application.
    InputFocusCaptured,
    /// Another application captured controller input.
    InputFocusReleased,
    RenderModelsShown,
    RenderModelsHidden,
    DeviceConnected { index: usize, class: DeviceClass },
    DeviceDisconnected { index: usize },
    /// Passthrough for native event codes the pipeline does not interpret.
    Native {
        code: u32,
        device_index: Option<usize>,
    },
}
