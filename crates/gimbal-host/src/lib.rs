//! Host engine capabilities consumed by the Gimbal pipeline.
//!
//! The host game engine implements these traits; the pipeline never touches
//! engine objects directly. Everything here is a narrow contract: cameras
//! addressable by name, named input actions per hand, and an opaque
//! per-frame render submission.

#![forbid(unsafe_code)]

pub mod camera;
pub mod input;
pub mod render;

pub use camera::{CameraHandle, CameraRig};
pub use input::{Hand, HandPair, InputSource};
pub use render::{EyeTarget, RenderBackend, TextureBounds};
