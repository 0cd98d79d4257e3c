//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration loading failure.
//!
//! Invariants:
//! - Variants carry enough context to locate the problem (field paths, variables, file paths).
//! - Conversion errors never include the raw environment value, which may be a secret.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document is malformed or a value has the wrong type.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment value could not be converted to the field's type.
    #[error("invalid value in {var} for {field} ({kind}): {message}")]
    Conversion {
        field: String,
        var: String,
        kind: &'static str,
        message: String,
    },

    /// A field carries an environment tag but has a kind the overrider cannot set.
    #[error("cannot override {group}.{field} from the environment: unsupported field type")]
    TypeMismatch { group: String, field: String },

    #[error("failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration has already been installed")]
    AlreadyInstalled,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether the error came from the JSON document.
    pub fn is_parse(&self) -> bool {
        matches!(self, ConfigError::Parse(_))
    }

    /// Whether the error came from the environment override pass.
    pub fn is_override(&self) -> bool {
        matches!(
            self,
            ConfigError::Conversion { .. } | ConfigError::TypeMismatch { .. }
        )
    }
}
