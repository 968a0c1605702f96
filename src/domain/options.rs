//! Per-run exporter options

use crate::domain::errors::AgentError;
use crate::domain::result::Result;
use crate::domain::storage::StorageTarget;
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

/// Checks that `date_format` is a chrono format string chrono can render
///
/// # Errors
///
/// Returns a configuration error for empty formats and formats containing
/// unknown or incomplete specifiers such as `%Q`.
pub fn validate_date_format(date_format: &str) -> Result<()> {
    if date_format.trim().is_empty() {
        return Err(AgentError::Configuration(
            "Date format cannot be empty".to_string(),
        ));
    }

    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(AgentError::Configuration(format!(
            "Invalid date format '{date_format}'"
        )));
    }
    Ok(())
}

/// Configuration snapshot for a single export run
///
/// Built exactly once per run, either by an exporter's override hook or by
/// the default path (context as-of date, the run's storage targets and the
/// exporter's configured file prefix). There are no setters: options are
/// fixed once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct ExporterOptions {
    as_of_date: NaiveDate,
    storage_targets: Vec<StorageTarget>,
    export_file_prefix: String,
}

impl ExporterOptions {
    /// Create options for one run
    pub fn new(
        as_of_date: NaiveDate,
        storage_targets: &[StorageTarget],
        export_file_prefix: impl Into<String>,
    ) -> Self {
        Self {
            as_of_date,
            storage_targets: storage_targets.to_vec(),
            export_file_prefix: export_file_prefix.into(),
        }
    }

    /// As-of date of the run
    pub fn as_of_date(&self) -> NaiveDate {
        self.as_of_date
    }

    /// Storage targets the run writes to
    pub fn storage_targets(&self) -> &[StorageTarget] {
        &self.storage_targets
    }

    /// Prefix for produced file names
    pub fn export_file_prefix(&self) -> &str {
        &self.export_file_prefix
    }

    /// File name for this run: `{prefix}_{as_of}{suffix}`
    ///
    /// `date_format` is a chrono format string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if chrono cannot render `date_format`.
    pub fn file_name(&self, date_format: &str, suffix: &str) -> Result<String> {
        let mut file_name = String::new();
        write!(
            file_name,
            "{}_{}{}",
            self.export_file_prefix,
            self.as_of_date.format(date_format),
            suffix
        )
        .map_err(|_| {
            AgentError::Configuration(format!("Invalid date format '{date_format}'"))
        })?;
        Ok(file_name)
    }
}
