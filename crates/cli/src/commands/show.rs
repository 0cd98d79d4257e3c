//! `show` command: print the effective configuration as JSON.

use anyhow::{Context, Result};
use shortbot_config::Configuration;
use std::io::Write;

pub fn run(config: &Configuration, show_secrets: bool, out: &mut dyn Write) -> Result<()> {
    let rendered = if show_secrets {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string_pretty(&config.redacted())
    }
    .context("Failed to serialize configuration")?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
