//! Configuration record for the shortbot service.
//!
//! Responsibilities:
//! - Define the nested configuration groups and their JSON key names.
//! - Provide zero-valued defaults for every group and leaf.
//! - Provide serialization helpers for secrets and nullable fields.
//!
//! Does NOT handle:
//! - Reading files or the environment (see `loader` module).
//! - Validating values beyond their types.
//!
//! Invariants:
//! - Groups are always present; a group missing from the JSON is zero-valued.
//! - JSON `null` for a group or duration field decodes to the zero value.
//! - Unknown JSON keys are ignored.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::REDACTED;
use crate::types::duration::HumanDuration;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Decodes `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}

fn redact(secret: &SecretString) -> SecretString {
    if secret.expose_secret().is_empty() {
        empty_secret()
    } else {
        SecretString::new(REDACTED.into())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Telegram bot token.
    #[serde(with = "secret_string")]
    pub token: SecretString,
    /// Listen address, e.g. `":8080"`.
    pub address: String,
    pub port: String,
    #[serde(rename = "readTimeout", deserialize_with = "null_as_default")]
    pub read_timeout: HumanDuration,
    #[serde(rename = "writeTimeout", deserialize_with = "null_as_default")]
    pub write_timeout: HumanDuration,
    /// How long Telegram may cache inline query results.
    #[serde(rename = "inlineQueryCacheTime", deserialize_with = "null_as_default")]
    pub inline_query_cache_time: HumanDuration,
    #[serde(rename = "TLS", deserialize_with = "null_as_default")]
    pub tls: TlsConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub shorteners: ShortenersConfig,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            token: empty_secret(),
            address: String::new(),
            port: String::new(),
            read_timeout: HumanDuration::ZERO,
            write_timeout: HumanDuration::ZERO,
            inline_query_cache_time: HumanDuration::ZERO,
            tls: TlsConfig::default(),
            shorteners: ShortenersConfig::default(),
        }
    }
}

impl Configuration {
    /// Returns a copy with every non-empty secret replaced by `[REDACTED]`.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.token = redact(&self.token);
        copy.shorteners.google.api_key = redact(&self.shorteners.google.api_key);
        copy
    }

    /// Whether both TLS files are configured.
    pub fn tls_enabled(&self) -> bool {
        !self.tls.certificate.is_empty() && !self.tls.key.is_empty()
    }
}

/// TLS certificate and key file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub certificate: String,
    pub key: String,
}

/// Settings for the URL-shortening backends.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortenersConfig {
    #[serde(rename = "Google", deserialize_with = "null_as_default")]
    pub google: GoogleShortenerConfig,
    #[serde(rename = "isgd", deserialize_with = "null_as_default")]
    pub isgd: IsgdShortenerConfig,
    #[serde(rename = "TinyURL", deserialize_with = "null_as_default")]
    pub tinyurl: TinyUrlShortenerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleShortenerConfig {
    #[serde(rename = "APIKey", with = "secret_string")]
    pub api_key: SecretString,
    #[serde(deserialize_with = "null_as_default")]
    pub timeout: HumanDuration,
}

impl Default for GoogleShortenerConfig {
    fn default() -> Self {
        Self {
            api_key: empty_secret(),
            timeout: HumanDuration::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsgdShortenerConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub timeout: HumanDuration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TinyUrlShortenerConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub timeout: HumanDuration,
}
