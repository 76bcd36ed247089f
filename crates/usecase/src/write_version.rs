use std::path::PathBuf;

use version_stamp_ports::VersionFileSink;
use version_stamp_shared_kernel::{Result, VersionString};

/// Writes `VERSION = "<version>"` to a single, fixed target file.
pub struct WriteVersionFile<'a> {
    sink: &'a dyn VersionFileSink,
    target: PathBuf,
}

impl<'a> WriteVersionFile<'a> {
    pub fn new(sink: &'a dyn VersionFileSink, target: impl Into<PathBuf>) -> Self {
        Self { sink, target: target.into() }
    }

    /// Overwrites the target with the declaration for `version`.
    ///
    /// Failures are returned as-is; there is no retry and no fallback.
    pub fn run(&self, version: &VersionString) -> Result<()> {
        let contents = version.declaration();
        log::debug!("rendered version declaration for {}: {contents}", self.target.display());

        self.sink.overwrite(&self.target, &contents)?;

        log::info!("wrote version {version} to {}", self.target.display());
        Ok(())
    }
}
