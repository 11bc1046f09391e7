//! Pose and device value types.
//!
//! Poses are plain values. Each transform stage produces a new pose from its
//! input; no component owns another's copy.

use glam::{Mat4, Quat, Vec3};

/// Upper bound on simultaneously tracked devices, set by the runtime.
pub const MAX_TRACKED_DEVICES: usize = 16;

/// Slot the head-mounted display occupies in a [`PoseSnapshot`].
pub const HMD_DEVICE_INDEX: usize = 0;

/// Position plus unit-quaternion rotation, in device space or world space
/// depending on the transform stage that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Class of a tracked device, as reported by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Empty or never-seen slot.
    #[default]
    None,
    Hmd,
    Controller,
    Tracker,
    BaseStation,
}

/// One device slot in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedPose {
    pub pose: Pose,
    pub valid: bool,
    pub class: DeviceClass,
}

/// Poses for every possible device index, refreshed as a whole once per
/// frame and immutable after publication until the next refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSnapshot {
    pub devices: [TrackedPose; MAX_TRACKED_DEVICES],
}

impl PoseSnapshot {
    pub const EMPTY: Self = Self {
        devices: [TrackedPose {
            pose: Pose::IDENTITY,
            valid: false,
            class: DeviceClass::None,
        }; MAX_TRACKED_DEVICES],
    };

    /// Snapshot with a single valid HMD pose in its canonical slot.
    pub fn with_hmd(pose: Pose) -> Self {
        let mut snapshot = Self::EMPTY;
        snapshot.devices[HMD_DEVICE_INDEX] = TrackedPose {
            pose,
            valid: true,
            class: DeviceClass::Hmd,
        };
        snapshot
    }

    /// The HMD slot, if it holds a valid pose.
    pub fn hmd(&self) -> Option<&TrackedPose> {
        let slot = &self.devices[HMD_DEVICE_INDEX];
        (slot.valid && slot.class == DeviceClass::Hmd).then_some(slot)
    }

    /// Device at `index`, if it holds a valid pose.
    pub fn device(&self, index: usize) -> Option<&TrackedPose> {
        let slot = self.devices.get(index)?;
        slot.valid.then_some(slot)
    }
}

impl Default for PoseSnapshot {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The two snapshots fetched together once per frame: `render` is the most
/// temporally accurate and feeds frame submission; `game` is published to
/// other subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FramePoses {
    pub render: PoseSnapshot,
    pub game: PoseSnapshot,
}

/// Eye index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Left, Eye::Right];

    pub fn index(self) -> usize {
        match self {
            Eye::Left => 0,
            Eye::Right => 1,
        }
    }
}

/// Zero-pose calibration mode of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingOrigin {
    Seated,
    Standing,
}

/// Fixed device characteristics reported by a successful gateway
/// initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HmdDescriptor {
    /// Per-eye render target width in pixels.
    pub target_width: u32,
    /// Per-eye render target height in pixels.
    pub target_height: u32,
    /// Fixed per-eye translation from the head pose origin, device space.
    pub eye_offsets: [Vec3; 2],
    /// Per-eye projection matrices.
    pub eye_projections: [Mat4; 2],
}

impl HmdDescriptor {
    pub fn eye_offset(&self, eye: Eye) -> Vec3 {
        self.eye_offsets[eye.index()]
    }

    pub fn eye_projection(&self, eye: Eye) -> Mat4 {
        self.eye_projections[eye.index()]
    }
}
