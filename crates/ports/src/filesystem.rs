// crates/ports/src/filesystem.rs
use std::path::Path;

use version_stamp_shared_kernel::Result;

/// Port for persisting the version declaration.
///
/// Implementations replace the whole file at `path` with `contents`. They must
/// not append, merge, or create missing parent directories.
pub trait VersionFileSink: Send + Sync {
    fn overwrite(&self, path: &Path, contents: &str) -> Result<()>;
}
