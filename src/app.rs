use std::io::Read;

use anyhow::Result;
use version_stamp_ports::HookProps;

use crate::config::HookConfig;

/// Decode the hook properties from `input` and run the `preCommit` hook.
pub fn run<R: Read>(mut input: R, config: &HookConfig) -> Result<()> {
    let mut raw = String::new();
    input.read_to_string(&mut raw)?;

    let props = HookProps::from_json(&raw)?;
    crate::run_hook(config, &props)?;
    Ok(())
}
