//! Release lifecycle hook that stamps the package version into a source
//! constant.
//!
//! The release tool calls the hook once per release, right before it commits,
//! with a properties object carrying the new `version`. The hook overwrites
//! `fritzexporter/_version.py` with a single `VERSION = "<version>"` line.

#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

pub mod app;
pub mod config;

pub use config::HookConfig;
pub use version_stamp_ports::HookProps;
pub use version_stamp_shared_kernel::{Result, VersionStampError, VersionString};

use version_stamp_infra::FsVersionFileSink;
use version_stamp_usecase::{PreCommitHook, WriteVersionFile};

/// Overwrite the version module, relative to the current working directory.
pub fn write(version: &VersionString) -> Result<()> {
    write_in(Path::new("."), version)
}

/// Overwrite the version module, relative to `root`.
pub fn write_in(root: &Path, version: &VersionString) -> Result<()> {
    let config = HookConfig::default().with_root(root);
    WriteVersionFile::new(&FsVersionFileSink, config.target_path()).run(version)
}

/// `preCommit` entry point for the release tool.
pub fn pre_commit(props: &HookProps) -> Result<()> {
    run_hook(&HookConfig::default(), props)
}

/// Run the `preCommit` hook with an explicit configuration.
pub fn run_hook(config: &HookConfig, props: &HookProps) -> Result<()> {
    PreCommitHook::new(&FsVersionFileSink, config.target_path()).run(props)
}
