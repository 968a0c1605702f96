//! Collaborators of the export orchestration layer.
//!
//! - [`storage`] - Storage writers (local filesystem)
//! - [`csv`] - CSV file exporter used by single-item exporters
//! - [`manifest`] - JSON manifest metadata for group exporters
//! - [`notification`] - Export report notifiers
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern**: the core depends only on the
//! traits ([`StorageWriter`](storage::StorageWriter),
//! [`FileExporter`](crate::core::export::FileExporter),
//! [`ExportGroup`](crate::core::export::ExportGroup),
//! [`ReportNotifier`](notification::ReportNotifier)), so tests and hosts can
//! swap in their own implementations.
//!
//! # Example
//!
//! ```rust
//! use export_agent::adapters::csv::{CsvFileExporter, CsvSettings};
//! use export_agent::adapters::manifest::ManifestGroup;
//! use export_agent::adapters::storage::LocalStorageWriter;
//! use std::sync::Arc;
//!
//! let storage = Arc::new(LocalStorageWriter::new());
//! let file_exporter = CsvFileExporter::new(storage.clone(), CsvSettings::default());
//! let group = ManifestGroup::new(storage, "%Y%m%d").expect("valid date format");
//! # let _ = (file_exporter, group);
//! ```

pub mod csv;
pub mod manifest;
pub mod notification;
pub mod storage;
