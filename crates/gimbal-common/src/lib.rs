//! Shared utilities for Gimbal: configuration, logging, helpers.
//!
//! This crate provides common infrastructure used across all Gimbal
//! components.

#![forbid(unsafe_code)]

pub mod config;

pub use config::VrConfig;

/// Initialize tracing with sensible defaults.
///
/// Log level is controlled by the `RUST_LOG` environment variable.
/// Defaults to `info` if not set.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Initialize tracing with a specific default level.
pub fn init_tracing_with_default(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Read a boolean from the environment. Accepts `1`/`true`/`yes`/`on`
/// (case-insensitive); anything else is false. Missing variables fall back
/// to `default`.
pub fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_bool_true_values() {
        std::env::set_var("GIMBAL_TEST_ENV_TRUE", "true");
        assert!(env_bool("GIMBAL_TEST_ENV_TRUE", false));

        std::env::set_var("GIMBAL_TEST_ENV_1", "1");
        assert!(env_bool("GIMBAL_TEST_ENV_1", false));

        std::env::set_var("GIMBAL_TEST_ENV_UPPER", "TRUE");
        assert!(env_bool("GIMBAL_TEST_ENV_UPPER", false));
    }

    #[test]
    fn test_env_bool_false_values() {
        std::env::set_var("GIMBAL_TEST_ENV_FALSE", "false");
        assert!(!env_bool("GIMBAL_TEST_ENV_FALSE", true));

        std::env::set_var("GIMBAL_TEST_ENV_0", "0");
        assert!(!env_bool("GIMBAL_TEST_ENV_0", true));
    }

    #[test]
    fn test_env_bool_missing_uses_default() {
        assert!(env_bool("GIMBAL_DEFINITELY_NOT_SET_12345", true));
        assert!(!env_bool("GIMBAL_DEFINITELY_NOT_SET_12345", false));
    }

    #[test]
    fn test_env_bool_whitespace_handling() {
        std::env::set_var("GIMBAL_TEST_ENV_SPACES", "  true  ");
        assert!(env_bool("GIMBAL_TEST_ENV_SPACES", false));
    }
}
