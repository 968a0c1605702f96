//! Export capability traits
//!
//! This module defines the seams between the orchestration types and the code
//! that plugs into them: data sources for single-item exports, the file export
//! collaborator, group children and group metadata policies.

use crate::domain::{ExportExecutionContext, ExportResult, ExporterOptions, Result, StorageTarget};
use async_trait::async_trait;

/// Source of the items a single-item exporter writes
///
/// Implemented once per exported domain type.
#[async_trait]
pub trait ExportDataSource: Send + Sync {
    /// The exported item type
    type Item: Send + Sync + 'static;

    /// Name of the exported item type, used in logs and as the group item type
    fn item_type(&self) -> &str;

    /// Fetch the items to export
    ///
    /// `Ok(None)` means the source had no valid data and is reported as a
    /// failed export. An `Err` is not translated by the exporter and
    /// propagates to its caller.
    async fn prepare_data(&self, context: &ExportExecutionContext)
        -> Result<Option<Vec<Self::Item>>>;

    /// Override the run options
    ///
    /// Returning `None` (the default) selects the exporter's default options.
    fn create_exporter_options(
        &self,
        _context: &ExportExecutionContext,
        _storage_targets: &[StorageTarget],
        _data: &[Self::Item],
    ) -> Option<ExporterOptions> {
        None
    }
}

/// Serializes items and writes them to the option's storage targets
///
/// Implementations report every failure through the returned
/// [`ExportResult`]; they never return an error.
#[async_trait]
pub trait FileExporter<T>: Send + Sync
where
    T: Send + Sync,
{
    /// Export `items` using `options`
    async fn export(&self, items: &[T], options: &ExporterOptions) -> ExportResult;
}

/// One child export unit inside a group
#[async_trait]
pub trait GroupItemExporter: Send + Sync {
    /// Domain item type this child is responsible for
    fn group_item_type(&self) -> &str;

    /// Run the child with the group's options
    ///
    /// A failed export is an `Ok(ExportResult::Failed)`. An `Err` is treated
    /// by the group as an unexpected fault.
    async fn run(
        &self,
        options: &ExporterOptions,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult>;
}

/// Combined metadata produced for a group run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    /// Reference to the metadata artifact
    pub file: String,

    /// Total item count represented by the metadata
    pub count: usize,
}

impl ExportMetadata {
    /// Create a metadata record
    pub fn new(file: impl Into<String>, count: usize) -> Self {
        Self {
            file: file.into(),
            count,
        }
    }
}

/// Group-specific policy of a group exporter
#[async_trait]
pub trait ExportGroup: Send + Sync {
    /// Build the metadata artifact for a finished fan-out
    ///
    /// `results` holds every child result, in launch order, including
    /// failures.
    async fn generate_metadata(
        &self,
        results: &[ExportResult],
        options: &ExporterOptions,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportMetadata>;

    /// Override the run options
    ///
    /// Returning `None` (the default) selects the exporter's default options.
    fn create_exporter_options(
        &self,
        _context: &ExportExecutionContext,
        _storage_targets: &[StorageTarget],
    ) -> Option<ExporterOptions> {
        None
    }
}

/// Anything that can be run as one export
///
/// Implemented by both single-item and group exporters so that callers such
/// as [`ExportRunner`](crate::core::export::ExportRunner) can drive either.
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Name used in logs and reports
    fn name(&self) -> &str;

    /// Run one export
    async fn run(
        &self,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportResult>;
}
