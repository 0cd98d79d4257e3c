//! Environment variable overrides for configuration.
//!
//! Responsibilities:
//! - Walk the configuration groups and apply bound environment variables.
//! - Convert raw environment strings into each field's type.
//! - List the field-to-variable bindings.
//!
//! Does NOT handle:
//! - Loading from JSON files (see file.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over file values.
//! - A variable that is set, even to an empty string, overrides the field.
//! - Traversal is depth-first in field declaration order; the first error stops the pass.
//! - Raw values are never logged or placed in errors.

use secrecy::SecretString;
use std::ffi::OsString;
use tracing::debug;

use super::error::ConfigError;
use super::fields::{EnvOverride, FieldKind, FieldSlot};
use crate::types::{Configuration, HumanDuration};

/// Name used for the top-level group in error messages.
const ROOT_GROUP: &str = "configuration";

/// A field path bound to an environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvBinding {
    /// Dotted path of the field, e.g. `shorteners.google.timeout`.
    pub path: String,
    pub var: &'static str,
    pub kind: FieldKind,
}

/// Looks a variable up in the process environment.
pub fn lookup_process_env(key: &str) -> Option<OsString> {
    std::env::var_os(key)
}

/// Apply environment variable overrides from the process environment.
pub fn apply_env_overrides(config: &mut Configuration) -> Result<(), ConfigError> {
    apply_env_overrides_with(config, lookup_process_env)
}

/// Apply environment variable overrides using `lookup` to resolve variables.
pub fn apply_env_overrides_with<F>(config: &mut Configuration, mut lookup: F) -> Result<(), ConfigError>
where
    F: FnMut(&str) -> Option<OsString>,
{
    override_group(config, "", &mut lookup)
}

/// Apply overrides to any group, e.g. one embedded in a larger record.
pub fn apply_group_overrides<F>(group: &mut dyn EnvOverride, mut lookup: F) -> Result<(), ConfigError>
where
    F: FnMut(&str) -> Option<OsString>,
{
    override_group(group, "", &mut lookup)
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn override_group(
    group: &mut dyn EnvOverride,
    prefix: &str,
    lookup: &mut dyn FnMut(&str) -> Option<OsString>,
) -> Result<(), ConfigError> {
    for field in group.fields() {
        let path = join_path(prefix, field.name);
        let Some(var) = field.env else {
            if let FieldSlot::Group(child) = field.slot {
                override_group(child, &path, lookup)?;
            }
            continue;
        };
        let Some(raw) = lookup(var) else {
            continue;
        };

        let kind = field.slot.kind();
        let raw = raw.into_string().map_err(|_| ConfigError::Conversion {
            field: path.clone(),
            var: var.to_string(),
            kind: kind.as_str(),
            message: "value is not valid unicode".to_string(),
        })?;

        match field.slot {
            FieldSlot::Text(value) => *value = raw,
            FieldSlot::Secret(value) => *value = SecretString::new(raw.into()),
            FieldSlot::Duration(value) => {
                *value = raw
                    .parse::<HumanDuration>()
                    .map_err(|e| ConfigError::Conversion {
                        field: path.clone(),
                        var: var.to_string(),
                        kind: kind.as_str(),
                        message: e.reason.to_string(),
                    })?;
            }
            FieldSlot::Group(_) => {
                return Err(ConfigError::TypeMismatch {
                    group: if prefix.is_empty() {
                        ROOT_GROUP.to_string()
                    } else {
                        prefix.to_string()
                    },
                    field: field.name.to_string(),
                });
            }
        }
        debug!(var, field = %path, "applied environment override");
    }
    Ok(())
}

/// Lists every field bound to an environment variable, in traversal order.
pub fn env_bindings() -> Vec<EnvBinding> {
    let mut probe = Configuration::default();
    let mut bindings = Vec::new();
    collect_bindings(&mut probe, "", &mut bindings);
    bindings
}

fn collect_bindings(group: &mut dyn EnvOverride, prefix: &str, out: &mut Vec<EnvBinding>) {
    for field in group.fields() {
        let path = join_path(prefix, field.name);
        match (field.env, field.slot) {
            (Some(var), slot) => out.push(EnvBinding {
                path,
                var,
                kind: slot.kind(),
            }),
            (None, FieldSlot::Group(child)) => collect_bindings(child, &path, out),
            (None, _) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIELD_ENV_VARS;
    use crate::loader::fields::Field;
    use crate::types::TlsConfig;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use std::time::Duration;

    fn lookup_from(vars: &[(&str, &str)]) -> impl FnMut(&str) -> Option<OsString> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).map(OsString::from)
    }

    #[test]
    fn test_string_and_secret_fields_take_raw_value() {
        let mut config = Configuration::default();
        apply_env_overrides_with(
            &mut config,
            lookup_from(&[("TOKEN", "xyz"), ("ADDRESS", ":8443"), ("TLS_KEY", "key.pem")]),
        )
        .unwrap();

        assert_eq!(config.token.expose_secret(), "xyz");
        assert_eq!(config.address, ":8443");
        assert_eq!(config.tls.key, "key.pem");
        assert!(config.tls.certificate.is_empty());
    }

    #[test]
    fn test_duration_fields_are_parsed() {
        let mut config = Configuration::default();
        apply_env_overrides_with(
            &mut config,
            lookup_from(&[
                ("READ_TIMEOUT", "10s"),
                ("GOOGLE_SHORTENER_TIMEOUT", "2m30s"),
                ("TINYURL_SHORTENER_TIMEOUT", "750ms"),
            ]),
        )
        .unwrap();

        assert_eq!(config.read_timeout.as_duration(), Duration::from_secs(10));
        assert_eq!(
            config.shorteners.google.timeout.as_duration(),
            Duration::from_secs(150)
        );
        assert_eq!(
            config.shorteners.tinyurl.timeout.as_duration(),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_empty_value_still_overrides_string_field() {
        let mut config = Configuration {
            address: ":8080".to_string(),
            ..Default::default()
        };
        apply_env_overrides_with(&mut config, lookup_from(&[("ADDRESS", "")])).unwrap();
        assert!(config.address.is_empty());
    }

    #[test]
    fn test_unparseable_duration_is_conversion_error() {
        let mut config = Configuration::default();
        let err = apply_env_overrides_with(
            &mut config,
            lookup_from(&[("READ_TIMEOUT", "notaduration")]),
        )
        .unwrap_err();

        match err {
            ConfigError::Conversion {
                field, var, kind, ..
            } => {
                assert_eq!(field, "read_timeout");
                assert_eq!(var, "READ_TIMEOUT");
                assert_eq!(kind, "duration");
            }
            other => panic!("expected Conversion, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_duration_is_conversion_error() {
        let mut config = Configuration::default();
        let err = apply_env_overrides_with(
            &mut config,
            lookup_from(&[("READ_TIMEOUT", "340282366920938463463374607431.9s")]),
        )
        .unwrap_err();

        assert!(
            matches!(err, ConfigError::Conversion { ref var, .. } if var == "READ_TIMEOUT"),
            "expected Conversion, got {err:?}"
        );
        assert!(config.read_timeout.is_zero());
    }

    #[test]
    fn test_conversion_error_halts_remaining_overrides() {
        let mut config = Configuration::default();
        let result = apply_env_overrides_with(
            &mut config,
            lookup_from(&[
                ("TOKEN", "before"),
                ("WRITE_TIMEOUT", "bogus"),
                ("TLS_CERTIFICATE", "after.pem"),
            ]),
        );

        assert!(result.unwrap_err().is_override());
        assert_eq!(config.token.expose_secret(), "before");
        assert!(config.tls.certificate.is_empty());
    }

    #[test]
    fn test_conversion_error_does_not_echo_value() {
        let mut config = Configuration::default();
        let err = apply_env_overrides_with(
            &mut config,
            lookup_from(&[("ISGD_SHORTENER_TIMEOUT", "s3cr3t-ish")]),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("ISGD_SHORTENER_TIMEOUT"));
        assert!(message.contains("shorteners.isgd.timeout"));
        assert!(!message.contains("s3cr3t-ish"));
    }

    #[test]
    fn test_non_unicode_value_is_conversion_error() {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStringExt;
            let mut config = Configuration::default();
            let err = apply_env_overrides_with(&mut config, |key| {
                (key == "PORT").then(|| OsString::from_vec(vec![0x66, 0x80, 0x6f]))
            })
            .unwrap_err();
            assert!(matches!(err, ConfigError::Conversion { ref var, .. } if var == "PORT"));
        }
    }

    struct Tagged {
        inner: TlsConfig,
    }

    impl EnvOverride for Tagged {
        fn fields(&mut self) -> Vec<Field<'_>> {
            let mut field = Field::group("inner", &mut self.inner);
            field.env = Some("TAGGED_GROUP");
            vec![field]
        }
    }

    #[test]
    fn test_tagged_group_is_type_mismatch_when_set() {
        let mut group = Tagged {
            inner: TlsConfig::default(),
        };
        let err = apply_group_overrides(&mut group, lookup_from(&[("TAGGED_GROUP", "x")]))
            .unwrap_err();
        match err {
            ConfigError::TypeMismatch { group, field } => {
                assert_eq!(group, "configuration");
                assert_eq!(field, "inner");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_tagged_group_ignored_when_unset() {
        let mut group = Tagged {
            inner: TlsConfig::default(),
        };
        apply_group_overrides(&mut group, lookup_from(&[("TLS_KEY", "key.pem")])).unwrap();
        assert!(group.inner.key.is_empty());
    }

    #[test]
    fn test_bindings_cover_every_field_variable_in_order() {
        let vars: Vec<&str> = env_bindings().iter().map(|b| b.var).collect();
        assert_eq!(vars, FIELD_ENV_VARS);
    }

    #[test]
    fn test_bindings_report_paths_and_kinds() {
        let bindings = env_bindings();
        let api_key = bindings
            .iter()
            .find(|b| b.var == "GOOGLE_SHORTENER_API_KEY")
            .unwrap();
        assert_eq!(api_key.path, "shorteners.google.api_key");
        assert_eq!(api_key.kind, FieldKind::Secret);

        let cache = bindings
            .iter()
            .find(|b| b.var == "INLINE_QUERY_CACHE_TIME")
            .unwrap();
        assert_eq!(cache.path, "inline_query_cache_time");
        assert_eq!(cache.kind, FieldKind::Duration);
    }
}
