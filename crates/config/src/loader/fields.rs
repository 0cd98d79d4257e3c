//! Field declarations for the environment override pass.
//!
//! Responsibilities:
//! - Define the `EnvOverride` trait each configuration group implements.
//! - Declare, per group, which fields are bound to which environment variables.
//!
//! Does NOT handle:
//! - Reading the environment or converting values (see `env.rs`).
//!
//! Invariants:
//! - Fields are listed in declaration order; the override pass visits them in that order.
//! - Nested groups carry no environment variable of their own.

use secrecy::SecretString;
use std::fmt;

use crate::constants::*;
use crate::types::{
    Configuration, GoogleShortenerConfig, HumanDuration, IsgdShortenerConfig, ShortenersConfig,
    TinyUrlShortenerConfig, TlsConfig,
};

/// Closed set of field kinds the override pass knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Duration,
    Group,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Secret => "secret",
            FieldKind::Duration => "duration",
            FieldKind::Group => "group",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable access to a single field's storage.
pub enum FieldSlot<'a> {
    Text(&'a mut String),
    Secret(&'a mut SecretString),
    Duration(&'a mut HumanDuration),
    Group(&'a mut dyn EnvOverride),
}

impl FieldSlot<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldSlot::Text(_) => FieldKind::Text,
            FieldSlot::Secret(_) => FieldKind::Secret,
            FieldSlot::Duration(_) => FieldKind::Duration,
            FieldSlot::Group(_) => FieldKind::Group,
        }
    }
}

/// A field of a configuration group, as seen by the override pass.
pub struct Field<'a> {
    /// Field name, used in error messages and binding paths.
    pub name: &'static str,
    /// Environment variable bound to this field, if any.
    pub env: Option<&'static str>,
    pub slot: FieldSlot<'a>,
}

impl<'a> Field<'a> {
    pub fn text(name: &'static str, env: &'static str, value: &'a mut String) -> Self {
        Self {
            name,
            env: Some(env),
            slot: FieldSlot::Text(value),
        }
    }

    pub fn secret(name: &'static str, env: &'static str, value: &'a mut SecretString) -> Self {
        Self {
            name,
            env: Some(env),
            slot: FieldSlot::Secret(value),
        }
    }

    pub fn duration(name: &'static str, env: &'static str, value: &'a mut HumanDuration) -> Self {
        Self {
            name,
            env: Some(env),
            slot: FieldSlot::Duration(value),
        }
    }

    pub fn group(name: &'static str, value: &'a mut dyn EnvOverride) -> Self {
        Self {
            name,
            env: None,
            slot: FieldSlot::Group(value),
        }
    }
}

/// A configuration group whose fields can be overridden from the environment.
pub trait EnvOverride {
    /// Lists the group's fields in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl EnvOverride for Configuration {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::secret("token", ENV_TOKEN, &mut self.token),
            Field::text("address", ENV_ADDRESS, &mut self.address),
            Field::text("port", ENV_PORT, &mut self.port),
            Field::duration("read_timeout", ENV_READ_TIMEOUT, &mut self.read_timeout),
            Field::duration("write_timeout", ENV_WRITE_TIMEOUT, &mut self.write_timeout),
            Field::duration(
                "inline_query_cache_time",
                ENV_INLINE_QUERY_CACHE_TIME,
                &mut self.inline_query_cache_time,
            ),
            Field::group("tls", &mut self.tls),
            Field::group("shorteners", &mut self.shorteners),
        ]
    }
}

impl EnvOverride for TlsConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::text("certificate", ENV_TLS_CERTIFICATE, &mut self.certificate),
            Field::text("key", ENV_TLS_KEY, &mut self.key),
        ]
    }
}

impl EnvOverride for ShortenersConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::group("google", &mut self.google),
            Field::group("isgd", &mut self.isgd),
            Field::group("tinyurl", &mut self.tinyurl),
        ]
    }
}

impl EnvOverride for GoogleShortenerConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::secret("api_key", ENV_GOOGLE_SHORTENER_API_KEY, &mut self.api_key),
            Field::duration("timeout", ENV_GOOGLE_SHORTENER_TIMEOUT, &mut self.timeout),
        ]
    }
}

impl EnvOverride for IsgdShortenerConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::duration(
            "timeout",
            ENV_ISGD_SHORTENER_TIMEOUT,
            &mut self.timeout,
        )]
    }
}

impl EnvOverride for TinyUrlShortenerConfig {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![Field::duration(
            "timeout",
            ENV_TINYURL_SHORTENER_TIMEOUT,
            &mut self.timeout,
        )]
    }
}
