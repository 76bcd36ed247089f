// crates/shared-kernel/src/value_objects/version.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version string supplied by the release tool.
///
/// The value is opaque: no parsing or validation happens here, and it is
/// written into the declaration verbatim (quotes and newlines included).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct VersionString(String);

impl VersionString {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source-level constant declaration, e.g. `VERSION = "1.4.2"`.
    pub fn declaration(&self) -> String {
        format!("VERSION = \"{}\"", self.0)
    }
}

impl From<&str> for VersionString {
    fn from(version: &str) -> Self {
        Self::new(version)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
