//! CSV serialization and storage of exported items

use crate::adapters::storage::StorageWriter;
use crate::config::schema::ExportConfig;
use crate::core::export::traits::FileExporter;
use crate::domain::{validate_date_format, AgentError, ExportResult, ExporterOptions, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// CSV output settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSettings {
    /// Field delimiter
    pub delimiter: u8,

    /// Write a header row derived from the item's field names
    pub include_headers: bool,

    /// chrono format of the as-of date in file names
    pub file_date_format: String,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            file_date_format: "%Y%m%d".to_string(),
        }
    }
}

impl CsvSettings {
    /// Build settings from the `[export]` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the delimiter is not a single ASCII character or
    /// the date format cannot be rendered.
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        validate_date_format(&config.file_date_format)?;

        let delimiter = match config.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => *byte,
            _ => {
                return Err(AgentError::Configuration(format!(
                    "csv_delimiter must be a single ASCII character, got '{}'",
                    config.csv_delimiter
                )))
            }
        };

        Ok(Self {
            delimiter,
            include_headers: config.csv_include_headers,
            file_date_format: config.file_date_format.clone(),
        })
    }
}

/// Writes items as a CSV file to every storage target of a run
///
/// The file is named `{prefix}_{as_of}.csv`. The exporter never returns an
/// error: serialization and storage failures become failed results.
pub struct CsvFileExporter {
    storage: Arc<dyn StorageWriter>,
    settings: CsvSettings,
}

impl CsvFileExporter {
    /// Create an exporter writing through `storage`
    pub fn new(storage: Arc<dyn StorageWriter>, settings: CsvSettings) -> Self {
        Self { storage, settings }
    }

    /// Create an exporter from the `[export]` configuration section
    pub fn from_config(config: &ExportConfig, storage: Arc<dyn StorageWriter>) -> Result<Self> {
        Ok(Self::new(storage, CsvSettings::from_config(config)?))
    }

    /// Settings in use
    pub fn settings(&self) -> &CsvSettings {
        &self.settings
    }

    fn serialize<T: Serialize>(&self, items: &[T]) -> Result<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.settings.delimiter)
            .has_headers(self.settings.include_headers)
            .from_writer(Vec::new());

        for item in items {
            writer.serialize(item)?;
        }

        writer.into_inner().map_err(|e| {
            AgentError::Serialization(format!("Failed to flush CSV buffer: {}", e.error()))
        })
    }
}

#[async_trait]
impl<T> FileExporter<T> for CsvFileExporter
where
    T: Serialize + Send + Sync + 'static,
{
    async fn export(&self, items: &[T], options: &ExporterOptions) -> ExportResult {
        let file_name = match options.file_name(&self.settings.file_date_format, ".csv") {
            Ok(file_name) => file_name,
            Err(e) => {
                tracing::error!(
                    prefix = %options.export_file_prefix(),
                    error = %e,
                    "Failed to build CSV file name"
                );
                return ExportResult::fail(e.to_string());
            }
        };

        if options.storage_targets().is_empty() {
            tracing::warn!(file = %file_name, "No storage targets to export to");
            return ExportResult::fail(format!("No storage targets to write {file_name} to"));
        }

        let contents = match self.serialize(items) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "Failed to serialize items");
                return ExportResult::fail(format!("Failed to serialize {file_name}: {e}"));
            }
        };

        for target in options.storage_targets() {
            match self.storage.write(target, &file_name, &contents).await {
                Ok(location) => tracing::info!(
                    file = %file_name,
                    target_name = %target.name,
                    location = %location,
                    count = items.len(),
                    "Exported CSV file"
                ),
                Err(e) => {
                    tracing::error!(
                        file = %file_name,
                        target_name = %target.name,
                        error = %e,
                        "Failed to store CSV file"
                    );
                    return ExportResult::fail(e.to_string());
                }
            }
        }

        ExportResult::success(file_name, items.len())
    }
}
