//! Frame pose sampler.
//!
//! Runs once per rendered frame, at the latest safe point before frame
//! submission. Sampling any earlier adds simulation and render work between
//! the sampled pose and the displayed photons.

use gimbal_vr::{FramePoses, GatewayResult, PoseSnapshot, RuntimeGateway};

/// Consumer of the per-frame game-logic snapshot.
pub trait PoseListener {
    fn on_poses(&mut self, snapshot: &PoseSnapshot);
}

/// Fetches the freshest device poses and publishes them.
pub struct FrameSampler {
    frame: FramePoses,
    listeners: Vec<Box<dyn PoseListener>>,
}

impl FrameSampler {
    pub fn new() -> Self {
        Self {
            frame: FramePoses::default(),
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn PoseListener>) {
        self.listeners.push(listener);
    }

    /// Fetch both snapshots, publish the game-logic one, and retain the
    /// render one for this frame's submission. Errors propagate to the
    /// caller; the previous snapshots are left untouched and must not be
    /// used for further rendering.
    pub fn sample(&mut self, gateway: &mut dyn RuntimeGateway) -> GatewayResult<()> {
        self.frame = gateway.last_poses()?;
        for listener in &mut self.listeners {
            listener.on_poses(&self.frame.game);
        }
        Ok(())
    }

    /// Most temporally accurate snapshot, feeding the current frame's
    /// submission.
    pub fn render_snapshot(&self) -> &PoseSnapshot {
        &self.frame.render
    }

    pub fn game_snapshot(&self) -> &PoseSnapshot {
        &self.frame.game
    }
}

impl Default for FrameSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gimbal_vr::{DummyGateway, GatewayError, Pose, RuntimeGateway as _};
    use glam::{Quat, Vec3};
    use std::sync::{Arc, Mutex};

    struct CountingListener {
        seen: Arc<Mutex<Vec<Vec3>>>,
    }

    impl PoseListener for CountingListener {
        fn on_poses(&mut self, snapshot: &PoseSnapshot) {
            let position = snapshot.hmd().map(|hmd| hmd.pose.position);
            self.seen.lock().unwrap().push(position.unwrap_or(Vec3::ZERO));
        }
    }

    #[test]
    fn test_sample_publishes_game_snapshot() {
        let mut gateway = DummyGateway::new();
        gateway.initialize().unwrap();
        gateway.set_head_pose(Pose::new(Vec3::new(0.0, 1.6, 0.0), Quat::IDENTITY));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut sampler = FrameSampler::new();
        sampler.subscribe(Box::new(CountingListener { seen: seen.clone() }));

        sampler.sample(&mut gateway).unwrap();
        sampler.sample(&mut gateway).unwrap();

        assert_eq!(seen.lock().unwrap().len(), 2);
        assert_eq!(seen.lock().unwrap()[0], Vec3::new(0.0, 1.6, 0.0));
        assert_eq!(
            sampler.render_snapshot().hmd().unwrap().pose.position,
            Vec3::new(0.0, 1.6, 0.0)
        );
    }

    #[test]
    fn test_sample_error_propagates_without_publishing() {
        let mut gateway = DummyGateway::new();
        gateway.initialize().unwrap();
        gateway.script_pose_failure(GatewayError::PoseQuery("tracking lost".into()));

        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut sampler = FrameSampler::new();
        sampler.subscribe(Box::new(CountingListener { seen: seen.clone() }));

        assert!(sampler.sample(&mut gateway).is_err());
        assert!(seen.lock().unwrap().is_empty());
    }
}
