//! Storage writers
//!
//! A [`StorageWriter`] persists a produced file on a [`StorageTarget`]. The
//! orchestration layer never talks to storage directly; the CSV file exporter
//! and the manifest group do.
//!
//! - [`traits`] - The writer abstraction
//! - [`local`] - Local filesystem writer

pub mod local;
pub mod traits;

pub use local::LocalStorageWriter;
pub use traits::StorageWriter;
