//! CSV file export
//!
//! [`CsvFileExporter`] is the file export collaborator used by single-item
//! exporters: it serializes items with the `csv` crate and writes the file to
//! every storage target of the run.

pub mod exporter;

pub use exporter::{CsvFileExporter, CsvSettings};
