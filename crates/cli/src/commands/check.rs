//! `check` command: confirm the configuration loads and summarize it.

use anyhow::Result;
use secrecy::ExposeSecret;
use shortbot_config::Configuration;
use std::io::Write;

pub fn run(config: &Configuration, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "configuration OK")?;
    writeln!(
        out,
        "  listen: {}{}",
        display_or_unset(&config.address),
        if config.port.is_empty() {
            String::new()
        } else {
            format!(" port {}", config.port)
        }
    )?;
    writeln!(
        out,
        "  token: {}",
        if config.token.expose_secret().is_empty() {
            "unset"
        } else {
            "set"
        }
    )?;
    writeln!(
        out,
        "  tls: {}",
        if config.tls_enabled() { "enabled" } else { "disabled" }
    )?;
    writeln!(
        out,
        "  timeouts: read {}, write {}, inline cache {}",
        config.read_timeout, config.write_timeout, config.inline_query_cache_time
    )?;

    let shorteners = &config.shorteners;
    writeln!(
        out,
        "  shorteners: google {} (key {}), isgd {}, tinyurl {}",
        shorteners.google.timeout,
        if shorteners.google.api_key.expose_secret().is_empty() {
            "unset"
        } else {
            "set"
        },
        shorteners.isgd.timeout,
        shorteners.tinyurl.timeout
    )?;
    Ok(())
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() { "(unset)" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use shortbot_config::HumanDuration;

    #[test]
    fn test_summary_never_prints_secrets() {
        let mut config = Configuration {
            token: SecretString::new("123:secret".to_string().into()),
            address: "0.0.0.0".to_string(),
            port: "8443".to_string(),
            read_timeout: HumanDuration::from_secs(10),
            ..Default::default()
        };
        config.tls.certificate = "c.pem".to_string();
        config.tls.key = "k.pem".to_string();

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("configuration OK"));
        assert!(text.contains("listen: 0.0.0.0 port 8443"));
        assert!(text.contains("token: set"));
        assert!(text.contains("tls: enabled"));
        assert!(text.contains("read 10s"));
        assert!(!text.contains("123:secret"));
    }

    #[test]
    fn test_summary_of_empty_configuration() {
        let mut out = Vec::new();
        run(&Configuration::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("listen: (unset)"));
        assert!(text.contains("token: unset"));
        assert!(text.contains("tls: disabled"));
        assert!(text.contains("google 0s (key unset)"));
    }
}
