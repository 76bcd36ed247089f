use version_stamp_ports::{HookProps, LifecycleStage, VersionFileSink};
use version_stamp_shared_kernel::Result;

use crate::write_version::WriteVersionFile;

/// Hook run by the release tool right before it commits the release.
pub struct PreCommitHook<'a> {
    writer: WriteVersionFile<'a>,
}

impl<'a> PreCommitHook<'a> {
    pub fn new(sink: &'a dyn VersionFileSink, target: impl Into<std::path::PathBuf>) -> Self {
        Self { writer: WriteVersionFile::new(sink, target) }
    }

    pub const fn stage(&self) -> LifecycleStage {
        LifecycleStage::PreCommit
    }

    pub fn run(&self, props: &HookProps) -> Result<()> {
        log::debug!("{} hook invoked for version {}", self.stage(), props.version);
        self.writer.run(&props.version)
    }
}
