//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test the builder sequencing of file and environment sources.
//! - Test overrides read from the real process environment.
//! - Test `.env` loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Every test that reads the process environment clears all field variables first.

use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::constants::{ENV_CONFIG_PATH, ENV_DOTENV_DISABLED, FIELD_ENV_VARS};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

fn field_env(vars: &[(&str, &str)]) -> Vec<(String, Option<String>)> {
    let mut all: Vec<(String, Option<String>)> = FIELD_ENV_VARS
        .iter()
        .chain(std::iter::once(&ENV_CONFIG_PATH))
        .map(|key| (key.to_string(), None))
        .collect();
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((key.to_string(), Some(value.to_string())));
    }
    all
}

/// Runs `f` with only `vars` set among the loader's variables.
pub fn with_field_env<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    temp_env::with_vars(field_env(vars), f)
}

/// Runs `f` with `.env` loading enabled and all loader variables unset.
///
/// Variables a `.env` file sets are restored when `f` returns.
pub fn with_dotenv_enabled<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut vars = field_env(&[]);
    vars.push((ENV_DOTENV_DISABLED.to_string(), None));
    temp_env::with_vars(vars, f)
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
