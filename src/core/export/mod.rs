//! Export orchestration
//!
//! This module provides the core export logic, including:
//! - Single-item exporters driven by a data source
//! - Group exporters fanning out to registered children
//! - The runner that times runs and reports them

pub mod group;
pub mod registry;
pub mod runner;
pub mod single;
pub mod summary;
pub mod traits;

pub use group::{CsvStorageGroupExporter, GroupExporterSettings};
pub use registry::{ExporterRegistry, Registration};
pub use runner::ExportRunner;
pub use single::{CsvStorageExporter, ExporterSettings, INVALID_SOURCE_DATA};
pub use summary::ExportReport;
pub use traits::{
    ExportDataSource, ExportGroup, ExportMetadata, Exporter, FileExporter, GroupItemExporter,
};
