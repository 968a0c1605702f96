//! Single-item CSV storage exporter
//!
//! Exports a homogeneous collection of one domain type: fetch the items from
//! an [`ExportDataSource`], settle the run options, then hand the items to a
//! [`FileExporter`] exactly once.

use crate::core::export::traits::{ExportDataSource, Exporter, FileExporter, GroupItemExporter};
use crate::domain::{ExportExecutionContext, ExportResult, ExporterOptions, Result, StorageTarget};
use async_trait::async_trait;
use std::sync::Arc;

/// Message of the result returned when a data source yields no data
pub const INVALID_SOURCE_DATA: &str = "Invalid data from the source.";

/// Construction-time settings of a single-item exporter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterSettings {
    /// Prefix of the exported file name
    pub export_file_prefix: String,
}

impl ExporterSettings {
    /// Create settings with the given file prefix
    pub fn new(export_file_prefix: impl Into<String>) -> Self {
        Self {
            export_file_prefix: export_file_prefix.into(),
        }
    }
}

/// Exports the items of one data source to CSV storage
pub struct CsvStorageExporter<S: ExportDataSource> {
    source: S,
    file_exporter: Arc<dyn FileExporter<S::Item>>,
    settings: ExporterSettings,
}

impl<S: ExportDataSource> CsvStorageExporter<S> {
    /// Create a new exporter
    pub fn new(
        source: S,
        file_exporter: Arc<dyn FileExporter<S::Item>>,
        settings: ExporterSettings,
    ) -> Self {
        Self {
            source,
            file_exporter,
            settings,
        }
    }

    /// The underlying data source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Configured file prefix
    pub fn export_file_prefix(&self) -> &str {
        &self.settings.export_file_prefix
    }

    /// Run the export
    ///
    /// Errors raised by the data source propagate unchanged; every other
    /// outcome is returned as an [`ExportResult`].
    pub async fn run(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        let item_type = self.source.item_type();
        tracing::info!(
            item_type = %item_type,
            context = %context.to_json(),
            "Loading the list of items"
        );

        let Some(data) = self.source.prepare_data(context).await? else {
            tracing::warn!(item_type = %item_type, "Data source returned no data");
            return Ok(ExportResult::fail(INVALID_SOURCE_DATA));
        };

        tracing::info!(
            item_type = %item_type,
            count = data.len(),
            context = %context.to_json(),
            "Exporting items"
        );

        let options = self
            .source
            .create_exporter_options(context, storage_targets, &data)
            .unwrap_or_else(|| self.create_default_options(context, storage_targets));

        Ok(self.file_exporter.export(&data, &options).await)
    }

    fn create_default_options(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> ExporterOptions {
        ExporterOptions::new(
            context.as_of_date,
            storage_targets,
            self.settings.export_file_prefix.as_str(),
        )
    }
}

#[async_trait]
impl<S: ExportDataSource> Exporter for CsvStorageExporter<S> {
    fn name(&self) -> &str {
        self.source.item_type()
    }

    async fn run(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        CsvStorageExporter::run(self, context, storage_targets).await
    }
}

/// A single-item exporter can be registered as a group child. It runs for the
/// group's as-of date and keeps its own file prefix.
#[async_trait]
impl<S: ExportDataSource> GroupItemExporter for CsvStorageExporter<S> {
    fn group_item_type(&self) -> &str {
        self.source.item_type()
    }

    async fn run(
        &self,
        options: &ExporterOptions,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult> {
        let context = ExportExecutionContext::new(options.as_of_date());
        CsvStorageExporter::run(self, &context, storage_targets).await
    }
}
