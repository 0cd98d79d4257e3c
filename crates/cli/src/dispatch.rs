//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their implementations.
//!
//! Does NOT handle:
//! - Argument parsing (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::{Result, bail};
use shortbot_config::Configuration;
use std::io::Write;

use crate::args::Commands;
use crate::commands;

pub(crate) fn run_command(
    command: &Commands,
    config: Option<&Configuration>,
    out: &mut dyn Write,
) -> Result<()> {
    match (command, config) {
        (Commands::Env, _) => commands::env::run(out),
        (Commands::Check, Some(config)) => commands::check::run(config, out),
        (Commands::Show { show_secrets }, Some(config)) => {
            commands::show::run(config, *show_secrets, out)
        }
        (_, None) => bail!("Internal error: command requires a loaded configuration"),
    }
}
