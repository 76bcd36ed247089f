use std::path::{Path, PathBuf};

use version_stamp_shared_kernel::TargetPath;

/// Where the hook writes. Built in code; nothing is read from disk or env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub root: PathBuf,
    pub target: TargetPath,
}

impl HookConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Target file resolved against the root.
    pub fn target_path(&self) -> PathBuf {
        self.target.resolve(&self.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for HookConfig {
    fn default() -> Self {
        Self { root: PathBuf::from("."), target: TargetPath::default() }
    }
}
