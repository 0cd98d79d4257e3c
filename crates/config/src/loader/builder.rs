//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for merging file and environment sources.
//! - Resolve which configuration file to read.
//! - Load `.env` files on request.
//!
//! Does NOT handle:
//! - JSON decoding details (delegated to file.rs).
//! - Environment override traversal (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values, whatever the call order.
//! - An explicit config path must be readable; the default path may be absent.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use super::env::{apply_env_overrides_with, lookup_process_env};
use super::error::ConfigError;
use super::file::{load_from_path, load_from_reader};
use crate::constants::{DEFAULT_CONFIG_PATH, ENV_CONFIG_PATH, ENV_DOTENV_DISABLED};
use crate::types::Configuration;

type EnvLookup = Box<dyn FnMut(&str) -> Option<OsString>>;

/// Configuration loader that builds config from a JSON file and environment variables.
pub struct ConfigLoader {
    config: Configuration,
    config_path: Option<PathBuf>,
    lookup: EnvLookup,
    env_applied: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader holding a zero-valued configuration.
    pub fn new() -> Self {
        Self {
            config: Configuration::default(),
            config_path: None,
            lookup: Box::new(lookup_process_env),
            env_applied: false,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the configuration file to read. The file must exist.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Resolve variables through `lookup` instead of the process environment.
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<OsString> + 'static,
    {
        self.lookup = Box::new(lookup);
        self
    }

    /// Read configuration from the JSON file.
    ///
    /// Uses the path set with `with_config_path`, then `CONFIG_PATH`, then
    /// `configuration.json` in the working directory. A blank path counts as
    /// unset. A missing default file is skipped and the configuration stays
    /// zero-valued.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let explicit = self
            .config_path
            .clone()
            .or_else(|| (self.lookup)(ENV_CONFIG_PATH).map(PathBuf::from))
            .filter(|path| !path.to_string_lossy().trim().is_empty());

        let config = match explicit {
            Some(path) => load_from_path(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !path.exists() {
                    debug!(path = %path.display(), "no configuration file found, skipping");
                    return Ok(self);
                }
                load_from_path(&path)?
            }
        };
        self.replace(config)?;
        Ok(self)
    }

    /// Read configuration from a JSON byte stream.
    pub fn from_reader<R: Read>(mut self, reader: R) -> Result<Self, ConfigError> {
        let config = load_from_reader(reader)?;
        self.replace(config)?;
        Ok(self)
    }

    /// Apply environment variable overrides.
    ///
    /// Environment variables take precedence over file settings. A file loaded
    /// after this call has the overrides applied again.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env_overrides_with(&mut self.config, &mut self.lookup)?;
        self.env_applied = true;
        Ok(self)
    }

    fn replace(&mut self, config: Configuration) -> Result<(), ConfigError> {
        self.config = config;
        if self.env_applied {
            apply_env_overrides_with(&mut self.config, &mut self.lookup)?;
        }
        Ok(())
    }

    /// Finish loading and return the configuration.
    pub fn build(self) -> Configuration {
        self.config
    }
}
