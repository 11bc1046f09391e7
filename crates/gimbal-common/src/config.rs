//! Startup configuration.
//!
//! Read once at startup; the running pipeline never consults it again.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::env_bool;

/// Environment override for [`VrConfig::auto_enable`].
pub const AUTO_ENABLE_ENV: &str = "GIMBAL_VR_ENABLED";

/// Startup configuration for the VR pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VrConfig {
    /// Enable VR as soon as the system is constructed, without waiting for
    /// the host to toggle it on.
    pub auto_enable: bool,
}

impl Default for VrConfig {
    fn default() -> Self {
        Self { auto_enable: false }
    }
}

impl VrConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply environment overrides on top of the loaded values.
    pub fn with_env_overrides(mut self) -> Self {
        self.auto_enable = env_bool(AUTO_ENABLE_ENV, self.auto_enable);
        self
    }
}
