//! # Infrastructure
//!
//! Filesystem adapters behind the ports used by the release hook.

// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;

pub use filesystem::FsVersionFileSink;
pub use persistence::FileWriter;
