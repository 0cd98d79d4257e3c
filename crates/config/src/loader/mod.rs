//! Configuration loader for JSON files and environment variables.
//!
//! Responsibilities:
//! - Decode the JSON configuration file into a `Configuration`.
//! - Apply environment variable overrides onto the decoded record.
//! - Provide a builder-pattern `ConfigLoader` that sequences both steps.
//!
//! Does NOT handle:
//! - Consuming the configuration (server, shortener clients).
//! - Validating values beyond type conversion.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The first error aborts loading; the caller must treat it as fatal.

mod builder;
mod env;
mod error;
mod fields;
mod file;

pub use builder::ConfigLoader;
pub use env::{
    EnvBinding, apply_env_overrides, apply_env_overrides_with, apply_group_overrides, env_bindings,
    lookup_process_env,
};
pub use error::ConfigError;
pub use fields::{EnvOverride, Field, FieldKind, FieldSlot};
pub use file::{load_from_path, load_from_reader};

#[cfg(test)]
mod tests;
