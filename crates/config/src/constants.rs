//! Centralized constants for the shortbot workspace.
//!
//! Environment variable names live here so the loader, the CLI and the tests
//! agree on a single spelling.

// =============================================================================
// Configuration File
// =============================================================================

/// Configuration file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "configuration.json";

/// Environment variable naming the configuration file location.
pub const ENV_CONFIG_PATH: &str = "CONFIG_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Field Overrides
// =============================================================================

pub const ENV_TOKEN: &str = "TOKEN";
pub const ENV_ADDRESS: &str = "ADDRESS";
pub const ENV_PORT: &str = "PORT";
pub const ENV_READ_TIMEOUT: &str = "READ_TIMEOUT";
pub const ENV_WRITE_TIMEOUT: &str = "WRITE_TIMEOUT";
pub const ENV_INLINE_QUERY_CACHE_TIME: &str = "INLINE_QUERY_CACHE_TIME";
pub const ENV_TLS_CERTIFICATE: &str = "TLS_CERTIFICATE";
pub const ENV_TLS_KEY: &str = "TLS_KEY";
pub const ENV_GOOGLE_SHORTENER_API_KEY: &str = "GOOGLE_SHORTENER_API_KEY";
pub const ENV_GOOGLE_SHORTENER_TIMEOUT: &str = "GOOGLE_SHORTENER_TIMEOUT";
pub const ENV_ISGD_SHORTENER_TIMEOUT: &str = "ISGD_SHORTENER_TIMEOUT";
pub const ENV_TINYURL_SHORTENER_TIMEOUT: &str = "TINYURL_SHORTENER_TIMEOUT";

/// Every field override variable, in traversal order.
pub const FIELD_ENV_VARS: &[&str] = &[
    ENV_TOKEN,
    ENV_ADDRESS,
    ENV_PORT,
    ENV_READ_TIMEOUT,
    ENV_WRITE_TIMEOUT,
    ENV_INLINE_QUERY_CACHE_TIME,
    ENV_TLS_CERTIFICATE,
    ENV_TLS_KEY,
    ENV_GOOGLE_SHORTENER_API_KEY,
    ENV_GOOGLE_SHORTENER_TIMEOUT,
    ENV_ISGD_SHORTENER_TIMEOUT,
    ENV_TINYURL_SHORTENER_TIMEOUT,
];

/// Placeholder printed in place of secret values.
pub const REDACTED: &str = "[REDACTED]";
