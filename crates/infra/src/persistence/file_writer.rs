// crates/infra/src/persistence/file_writer.rs
use std::{fs::File, io::Write, path::Path};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Replace the contents of `path` with `data`.
    ///
    /// The file is created or truncated, never appended to. A missing parent
    /// directory is reported as an error rather than created. The data goes
    /// straight to the file with no userspace buffer, so a failed write is
    /// never flushed again on drop.
    pub fn overwrite<P: AsRef<Path>>(path: P, data: &[u8]) -> std::io::Result<()> {
        File::create(path.as_ref())?.write_all(data)
    }
}
