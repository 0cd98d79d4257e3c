//! Shared test utilities for shortbot-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every configuration override variable is cleared so the host cannot leak in.

use assert_cmd::Command;
use shortbot_config::constants::{ENV_CONFIG_PATH, ENV_DOTENV_DISABLED, FIELD_ENV_VARS};
use std::path::Path;

/// Returns a hermetic `shortbot-cli` command running in `dir`.
pub fn shortbot_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shortbot-cli");
    cmd.current_dir(dir);

    // Hermeticity: prevent loading local .env
    cmd.env(ENV_DOTENV_DISABLED, "1");
    cmd.env_remove(ENV_CONFIG_PATH).env_remove("RUST_LOG");
    for var in FIELD_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}
