// crates/shared-kernel/src/value_objects/target.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Relative location of the generated version module inside the package.
pub const DEFAULT_TARGET: &str = "fritzexporter/_version.py";

/// File that receives the version declaration. Always fully overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins the target onto `root`. An absolute target ignores `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl Default for TargetPath {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}
