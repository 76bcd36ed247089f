// crates/infra/src/filesystem.rs
use std::path::Path;

use version_stamp_ports::VersionFileSink;
use version_stamp_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// [`VersionFileSink`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsVersionFileSink;

impl VersionFileSink for FsVersionFileSink {
    fn overwrite(&self, path: &Path, contents: &str) -> Result<()> {
        log::debug!("overwriting {} ({} bytes)", path.display(), contents.len());
        FileWriter::overwrite(path, contents.as_bytes()).map_err(|source| {
            InfrastructureError::FileWrite { path: path.to_path_buf(), source }.into()
        })
    }
}
