// crates/infra/src/persistence.rs
mod file_writer;

pub use file_writer::FileWriter;
