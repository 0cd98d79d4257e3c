//! `env` command: list the environment variables bound to configuration fields.

use anyhow::Result;
use shortbot_config::{EnvBinding, env_bindings, lookup_process_env};
use std::ffi::OsString;
use std::io::Write;

pub fn run(out: &mut dyn Write) -> Result<()> {
    write_bindings(&env_bindings(), lookup_process_env, out)
}

fn write_bindings<F>(bindings: &[EnvBinding], lookup: F, out: &mut dyn Write) -> Result<()>
where
    F: Fn(&str) -> Option<OsString>,
{
    writeln!(out, "{:<28} {:<32} {:<9} STATUS", "VARIABLE", "FIELD", "KIND")?;
    for binding in bindings {
        let status = if lookup(binding.var).is_some() {
            "set"
        } else {
            "unset"
        };
        writeln!(
            out,
            "{:<28} {:<32} {:<9} {}",
            binding.var,
            binding.path,
            binding.kind.as_str(),
            status
        )?;
    }
    Ok(())
}
