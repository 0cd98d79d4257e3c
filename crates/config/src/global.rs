//! Process-wide configuration instance.
//!
//! The configuration is loaded once during startup and installed here; after
//! that it is read-only and shared as `&'static Configuration`.

use std::sync::OnceLock;

use crate::loader::ConfigError;
use crate::types::Configuration;

static CONFIG: OnceLock<Configuration> = OnceLock::new();

/// Install the process-wide configuration.
///
/// Fails with `ConfigError::AlreadyInstalled` if called more than once.
pub fn install(config: Configuration) -> Result<&'static Configuration, ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)?;
    CONFIG.get().ok_or(ConfigError::AlreadyInstalled)
}

/// The installed configuration, if `install` has been called.
pub fn global() -> Option<&'static Configuration> {
    CONFIG.get()
}
