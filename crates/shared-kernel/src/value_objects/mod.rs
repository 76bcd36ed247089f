// crates/shared-kernel/src/value_objects/mod.rs
pub mod target;
pub mod version;

pub use target::{DEFAULT_TARGET, TargetPath};
pub use version::VersionString;
