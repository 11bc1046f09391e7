//! Render backend boundary.

/// UV rectangle within a render target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureBounds {
    pub u_min: f32,
    pub u_max: f32,
    pub v_min: f32,
    pub v_max: f32,
}

impl TextureBounds {
    /// Full quad with the vertical axis flipped (`v_min = 1`, `v_max = 0`),
    /// compensating for the backend's texture coordinate convention.
    pub const FULL_FLIPPED: Self = Self {
        u_min: 0.0,
        u_max: 1.0,
        v_min: 1.0,
        v_max: 0.0,
    };
}

/// One eye's render target as handed to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeTarget {
    /// Opaque texture handle owned by the rendering layer.
    pub handle: u64,
    pub width: u32,
    pub height: u32,
    pub bounds: TextureBounds,
}

/// The rendering backend that draws into the headset's swapchain.
///
/// Consumed as an opaque boundary: target registration once per runtime
/// initialization, then one fire-and-forget submission per running frame.
pub trait RenderBackend {
    /// Register the two per-eye targets. Called when the runtime reaches
    /// `Running`, before the first submission.
    fn register_targets(&mut self, left: EyeTarget, right: EyeTarget);

    /// Submit the current frame. Never called before the frame's poses were
    /// sampled.
    fn submit(&mut self);
}
