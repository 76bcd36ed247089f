// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Layer errors are shown as-is so the underlying failure is reported once.
#[derive(Debug, Error)]
pub enum VersionStampError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl VersionStampError {
    /// Kind of the underlying I/O failure, if the error came from a write.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Infrastructure(InfrastructureError::FileWrite { source, .. }) => Some(source.kind()),
            Self::Presentation(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionStampError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid hook properties: {reason}")]
    InvalidHookProps { reason: String },

    #[error("Unknown lifecycle stage: {0}")]
    UnknownStage(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidHookProps { reason: err.to_string() }
    }
}

impl From<serde_json::Error> for VersionStampError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}
