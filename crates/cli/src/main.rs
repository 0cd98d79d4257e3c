//! shortbot CLI - inspect the bot configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration exactly as the bot does at startup.
//! - Report the result for operators and scripts.
//!
//! Does NOT handle:
//! - Running the bot or contacting shortener APIs.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - The file is decoded before environment overrides are applied.
//! - Logs go to stderr; command output goes to stdout.

mod args;
mod commands;
mod dispatch;
mod error;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use shortbot_config::{ConfigLoader, Configuration};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parse only the flag that controls `.env` loading, before full CLI parsing.
fn dotenv_requested() -> bool {
    !std::env::args().any(|arg| arg == "--no-dotenv")
}

fn load_configuration(cli: &Cli) -> Result<&'static Configuration> {
    let mut loader = ConfigLoader::new();
    if let Some(ref path) = cli.config {
        // Blank values fall back to the default location.
        if !path.to_string_lossy().trim().is_empty() {
            loader = loader.with_config_path(path.clone());
        }
    }

    loader = loader
        .from_file()
        .context("Failed to load configuration file")?;
    if cli.no_env {
        tracing::debug!("skipping environment overrides");
    } else {
        loader = loader
            .from_env()
            .context("Failed to apply environment overrides")?;
    }

    shortbot_config::install(loader.build()).context("Failed to install configuration")
}

fn run(cli: &Cli) -> Result<()> {
    let config = if cli.command.needs_config() {
        Some(load_configuration(cli)?)
    } else {
        None
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(&cli.command, config, &mut out)
}

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if dotenv_requested() {
        if let Err(e) = ConfigLoader::new().load_dotenv() {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
