// crates/ports/src/hook.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use version_stamp_shared_kernel::{PresentationError, PresentationResult, VersionString};

/// Properties object handed to a hook by the release tool.
///
/// Only `version` is interpreted. Any other fields the tool sends are kept
/// in `extra` so they round-trip, but nothing reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookProps {
    pub version: VersionString,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HookProps {
    pub fn new(version: impl Into<VersionString>) -> Self {
        Self { version: version.into(), extra: Map::new() }
    }

    /// Decode the properties object from its JSON form.
    pub fn from_json(input: &str) -> PresentationResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Named points in the release workflow at which hooks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStage {
    #[serde(rename = "preCommit")]
    PreCommit,
}

impl LifecycleStage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreCommit => "preCommit",
        }
    }
}

impl fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStage {
    type Err = PresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preCommit" => Ok(Self::PreCommit),
            other => Err(PresentationError::UnknownStage(other.to_string())),
        }
    }
}
