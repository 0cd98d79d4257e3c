//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main`).
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shortbot-cli")]
#[command(about = "Inspect the shortbot configuration as the bot would load it", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  shortbot-cli check\n  shortbot-cli --config /etc/shortbot/configuration.json show\n  READ_TIMEOUT=30s shortbot-cli show\n  shortbot-cli env\n"
)]
pub struct Cli {
    /// Path to the JSON configuration file (default: ./configuration.json).
    #[arg(long, global = true, env = "CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip environment variable overrides.
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Do not load a `.env` file before reading the environment.
    #[arg(long, global = true)]
    pub no_dotenv: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the configuration and report whether it is usable
    Check,

    /// Print the effective configuration as JSON
    Show {
        /// Print secret values instead of [REDACTED]
        #[arg(long)]
        show_secrets: bool,
    },

    /// List the environment variables that override configuration fields
    Env,
}

impl Commands {
    /// Whether the command needs the configuration to be loaded.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Commands::Env)
    }
}
