//! # Use Cases
//!
//! Application-level orchestration for the release hook.
//!
//! - [`write_version`]: Render the version declaration and hand it to the sink
//! - [`pre_commit`]: The `preCommit` lifecycle entry point
//!
//! Use cases depend on ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod pre_commit;
pub mod write_version;

pub use pre_commit::PreCommitHook;
pub use write_version::WriteVersionFile;
