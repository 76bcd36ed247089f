// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{InfrastructureError, PresentationError, PresentationResult, Result, VersionStampError};

pub mod error;
pub mod value_objects;

pub use value_objects::{DEFAULT_TARGET, TargetPath, VersionString};
