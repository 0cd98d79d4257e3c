//! Configuration type definitions for shortbot.
//!
//! Responsibilities:
//! - Define the configuration record and its nested groups.
//! - Define the human-readable duration leaf type.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//!
//! Invariants:
//! - Secret leaves use `secrecy::SecretString` so they never appear in `Debug` output.
//! - Every type has a zero-valued `Default`.

mod duration;
mod settings;

pub use duration::{DurationParseError, HumanDuration};
pub use settings::{
    Configuration, GoogleShortenerConfig, IsgdShortenerConfig, ShortenersConfig,
    TinyUrlShortenerConfig, TlsConfig,
};
