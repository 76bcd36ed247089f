//! # Ports
//!
//! Interface definitions for the hook's external dependencies.
//!
//! - [`filesystem`]: Persisting the rendered version declaration
//! - [`hook`]: The properties object and lifecycle stages of the release tool
//!
//! Use cases depend on these traits and types only, never on a concrete
//! filesystem adapter.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod hook;

pub use filesystem::VersionFileSink;
pub use hook::{HookProps, LifecycleStage};
