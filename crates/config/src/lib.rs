//! Configuration management for shortbot.
//!
//! This crate provides the configuration record and the loader that fills it
//! from a JSON file and environment variable overrides.

pub mod constants;
mod global;
mod loader;
pub mod types;

pub use global::{global, install};
pub use loader::{
    ConfigError, ConfigLoader, EnvBinding, EnvOverride, Field, FieldKind, FieldSlot,
    apply_env_overrides, apply_env_overrides_with, apply_group_overrides, env_bindings,
    load_from_path, load_from_reader, lookup_process_env,
};
pub use types::{
    Configuration, DurationParseError, GoogleShortenerConfig, HumanDuration, IsgdShortenerConfig,
    ShortenersConfig, TinyUrlShortenerConfig, TlsConfig,
};
