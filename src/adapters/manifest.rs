//! Manifest-based group metadata
//!
//! [`ManifestGroup`] is an [`ExportGroup`] that records a group run as a JSON
//! manifest listing every child result, successes and failures alike, and
//! writes it next to the children's files.

use crate::adapters::storage::StorageWriter;
use crate::core::export::traits::{ExportGroup, ExportMetadata};
use crate::domain::context::ResultExt;
use crate::domain::{validate_date_format, ExportResult, ExporterOptions, Result, StorageTarget};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Suffix of manifest file names
pub const MANIFEST_SUFFIX: &str = "_manifest.json";

/// Contents of a group manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// File prefix of the group run
    pub export_file_prefix: String,

    /// As-of date of the group run
    pub as_of_date: NaiveDate,

    /// When the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Sum of the item counts of all successful children
    pub total_count: usize,

    /// Number of successful children
    pub succeeded: usize,

    /// Number of failed children
    pub failed: usize,

    /// Child results in launch order
    pub entries: Vec<ExportResult>,
}

impl ExportManifest {
    /// Build a manifest from child results
    pub fn from_results(results: &[ExportResult], options: &ExporterOptions) -> Self {
        let failed = results.iter().filter(|result| result.has_error()).count();
        Self {
            export_file_prefix: options.export_file_prefix().to_string(),
            as_of_date: options.as_of_date(),
            generated_at: Utc::now(),
            total_count: results.iter().map(ExportResult::count).sum(),
            succeeded: results.len() - failed,
            failed,
            entries: results.to_vec(),
        }
    }
}

/// Group policy writing a JSON manifest to every storage target
pub struct ManifestGroup {
    storage: Arc<dyn StorageWriter>,
    file_date_format: String,
}

impl ManifestGroup {
    /// Create a manifest group writing through `storage`
    ///
    /// `file_date_format` is the chrono format of the as-of date in the
    /// manifest file name.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if chrono cannot render the format.
    pub fn new(
        storage: Arc<dyn StorageWriter>,
        file_date_format: impl Into<String>,
    ) -> Result<Self> {
        let file_date_format = file_date_format.into();
        validate_date_format(&file_date_format)?;
        Ok(Self {
            storage,
            file_date_format,
        })
    }
}

#[async_trait]
impl ExportGroup for ManifestGroup {
    async fn generate_metadata(
        &self,
        results: &[ExportResult],
        options: &ExporterOptions,
        storage_targets: &[StorageTarget],
    ) -> Result<ExportMetadata> {
        let file_name = options.file_name(&self.file_date_format, MANIFEST_SUFFIX)?;
        let manifest = ExportManifest::from_results(results, options);
        let contents = serde_json::to_vec_pretty(&manifest)?;

        if storage_targets.is_empty() {
            tracing::warn!(file = %file_name, "No storage targets to write the manifest to");
        }

        for target in storage_targets {
            self.storage
                .write(target, &file_name, &contents)
                .await
                .with_context(|| {
                    format!("Failed to write manifest to storage target '{}'", target.name)
                })?;
        }

        tracing::info!(
            file = %file_name,
            total_count = manifest.total_count,
            succeeded = manifest.succeeded,
            failed = manifest.failed,
            "Generated export manifest"
        );

        Ok(ExportMetadata::new(file_name, manifest.total_count))
    }
}
