//! JSON configuration file loading.
//!
//! Responsibilities:
//! - Decode a JSON document from any reader into a `Configuration`.
//! - Open and decode configuration files from disk.
//!
//! Does NOT handle:
//! - Environment variable overrides (see env.rs).
//! - Choosing which file to load (see builder.rs).
//!
//! Invariants:
//! - Unknown keys are ignored and missing keys keep their zero values.
//! - Decode failures surface as `ConfigError::Parse` with the decoder's position.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use super::error::ConfigError;
use crate::types::Configuration;

/// Decode a configuration from a JSON byte stream.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Configuration, ConfigError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decode a configuration from the JSON file at `path`.
pub fn load_from_path(path: &Path) -> Result<Configuration, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = load_from_reader(BufReader::new(file))?;
    info!(path = %path.display(), "loaded configuration file");
    Ok(config)
}
