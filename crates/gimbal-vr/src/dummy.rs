//! Scriptable gateway double for tests and headless hosts.

use std::collections::VecDeque;

use glam::{Mat4, Vec3};

use crate::event::RuntimeEvent;
use crate::gateway::{RuntimeGateway, MAX_EVENTS_PER_POLL};
use crate::types::{
    DeviceClass, FramePoses, HmdDescriptor, Pose, PoseSnapshot, TrackedPose, TrackingOrigin,
    MAX_TRACKED_DEVICES,
};
use crate::{GatewayError, GatewayResult};

/// In-memory [`RuntimeGateway`] with scriptable outcomes.
///
/// Initialization failures and pose-query failures are queued ahead of time;
/// the head pose and any other device slots are set directly. Counters
/// record calls the pipeline is expected to make.
pub struct DummyGateway {
    descriptor: HmdDescriptor,
    init_failures: VecDeque<GatewayError>,
    pose_failures: VecDeque<GatewayError>,
    pending_events: VecDeque<RuntimeEvent>,
    devices: [TrackedPose; MAX_TRACKED_DEVICES],
    seated_origin: Vec3,
    pub initialized: bool,
    pub init_calls: u32,
    pub shutdown_calls: u32,
    pub pose_queries: u32,
    pub seated_origin_resets: u32,
    pub tracking_origin: Option<TrackingOrigin>,
}

impl DummyGateway {
    pub fn new() -> Self {
        let fov = std::f32::consts::FRAC_PI_2;
        let descriptor = HmdDescriptor {
            target_width: 1440,
            target_height: 1600,
            eye_offsets: [Vec3::new(-0.032, 0.0, 0.0), Vec3::new(0.032, 0.0, 0.0)],
            eye_projections: [Mat4::perspective_rh(fov, 0.9, 0.05, 1000.0); 2],
        };
        let mut devices = [TrackedPose::default(); MAX_TRACKED_DEVICES];
        devices[0] = TrackedPose {
            pose: Pose::IDENTITY,
            valid: true,
            class: DeviceClass::Hmd,
        };
        Self {
            descriptor,
            init_failures: VecDeque::new(),
            pose_failures: VecDeque::new(),
            pending_events: VecDeque::new(),
            devices,
            seated_origin: Vec3::ZERO,
            initialized: false,
            init_calls: 0,
            shutdown_calls: 0,
            pose_queries: 0,
            seated_origin_resets: 0,
            tracking_origin: None,
        }
    }

    /// Queue a failure for the next `initialize` call. Queued failures are
    /// consumed in order; once drained, `initialize` succeeds.
    pub fn script_init_failure(&mut self, error: GatewayError) {
        self.init_failures.push_back(error);
    }

    /// Queue a failure for the next `last_poses` call.
    pub fn script_pose_failure(&mut self, error: GatewayError) {
        self.pose_failures.push_back(error);
    }

    /// Queue a runtime event for a later `poll_events` drain.
    pub fn queue_event(&mut self, event: RuntimeEvent) {
        self.pending_events.push_back(event);
    }

    /// Move the physical head. Reported poses are relative to the seated
    /// origin captured by the last `reset_seated_origin`.
    pub fn set_head_pose(&mut self, pose: Pose) {
        self.devices[0] = TrackedPose {
            pose,
            valid: true,
            class: DeviceClass::Hmd,
        };
    }

    /// Populate an arbitrary device slot.
    pub fn set_device(&mut self, index: usize, pose: Pose, class: DeviceClass) {
        self.devices[index] = TrackedPose {
            pose,
            valid: true,
            class,
        };
    }

    pub fn descriptor(&self) -> HmdDescriptor {
        self.descriptor
    }

    fn snapshot(&self) -> PoseSnapshot {
        let mut snapshot = PoseSnapshot::EMPTY;
        for (index, device) in self.devices.iter().enumerate() {
            if !device.valid {
                continue;
            }
            let mut reported = *device;
            reported.pose.position -= self.seated_origin;
            snapshot.devices[index] = reported;
        }
        snapshot
    }
}

impl Default for DummyGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeGateway for DummyGateway {
    fn initialize(&mut self) -> GatewayResult<HmdDescriptor> {
        self.init_calls += 1;
        if let Some(error) = self.init_failures.pop_front() {
            return Err(error);
        }
        self.initialized = true;
        Ok(self.descriptor)
    }

    fn shutdown(&mut self) {
        self.initialized = false;
        self.shutdown_calls += 1;
    }

    fn poll_events(&mut self) -> Vec<RuntimeEvent> {
        let batch = self.pending_events.len().min(MAX_EVENTS_PER_POLL);
        self.pending_events.drain(..batch).collect()
    }

    fn last_poses(&mut self) -> GatewayResult<FramePoses> {
        self.pose_queries += 1;
        if let Some(error) = self.pose_failures.pop_front() {
            return Err(error);
        }
        let snapshot = self.snapshot();
        Ok(FramePoses {
            render: snapshot,
            game: snapshot,
        })
    }

    fn reset_seated_origin(&mut self) {
        self.seated_origin_resets += 1;
        self.seated_origin = self.devices[0].pose.position;
    }

    fn set_tracking_origin(&mut self, origin: TrackingOrigin) {
        self.tracking_origin = Some(origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    #[test]
    fn test_scripted_failure_then_success() {
        let mut gateway = DummyGateway::new();
        gateway.script_init_failure(GatewayError::DeviceNotPresent);

        assert_eq!(
            gateway.initialize(),
            Err(GatewayError::DeviceNotPresent)
        );
        assert!(!gateway.initialized);

        assert!(gateway.initialize().is_ok());
        assert!(gateway.initialized);
        assert_eq!(gateway.init_calls, 2);
    }

    #[test]
    fn test_poll_events_is_bounded() {
        let mut gateway = DummyGateway::new();
        for code in 0..(MAX_EVENTS_PER_POLL as u32 + 1) {
            gateway.queue_event(RuntimeEvent::Native {
                code,
                device_index: None,
            });
        }

        let first = gateway.poll_events();
        assert_eq!(first.len(), MAX_EVENTS_PER_POLL);

        // The overflow event drains on the next frame, not dropped.
        let second = gateway.poll_events();
        assert_eq!(
            second,
            vec![RuntimeEvent::Native {
                code: MAX_EVENTS_PER_POLL as u32,
                device_index: None,
            }]
        );
        assert!(gateway.poll_events().is_empty());
    }

    #[test]
    fn test_reset_seated_origin_is_idempotent() {
        let mut gateway = DummyGateway::new();
        gateway.initialize().unwrap();
        gateway.set_head_pose(Pose::new(Vec3::new(0.3, 1.7, -0.1), Quat::IDENTITY));

        gateway.reset_seated_origin();
        let once = gateway.last_poses().unwrap();

        // Second reset with no movement: same subsequent pose stream.
        gateway.reset_seated_origin();
        let twice = gateway.last_poses().unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.render.hmd().unwrap().pose.position, Vec3::ZERO);
    }

    #[test]
    fn test_scripted_pose_failure() {
        let mut gateway = DummyGateway::new();
        gateway.initialize().unwrap();
        gateway.script_pose_failure(GatewayError::PoseQuery("tracking lost".into()));

        assert!(gateway.last_poses().is_err());
        assert!(gateway.last_poses().is_ok());
    }
}
