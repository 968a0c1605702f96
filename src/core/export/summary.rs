//! Export run report
//!
//! An [`ExportReport`] wraps the [`ExportResult`] of one run with the facts a
//! notifier needs: which exporter ran, for which date, when and for how long.

use crate::domain::ExportResult;
use chrono::{DateTime, NaiveDate, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Report of a single export run
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Unique id of the run
    pub run_id: Uuid,

    /// Name of the exporter that ran
    pub exporter: String,

    /// As-of date of the run
    pub as_of_date: NaiveDate,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Duration of the run
    pub duration: Duration,

    /// Outcome of the run
    pub result: ExportResult,
}

impl ExportReport {
    /// Create a report for a run that started at `started_at`
    pub fn new(
        exporter: impl Into<String>,
        as_of_date: NaiveDate,
        started_at: DateTime<Utc>,
        result: ExportResult,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            exporter: exporter.into(),
            as_of_date,
            started_at,
            duration: Duration::from_secs(0),
            result,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Check if the run succeeded
    pub fn is_successful(&self) -> bool {
        self.result.is_success()
    }

    /// One-line human readable description
    pub fn headline(&self) -> String {
        match &self.result {
            ExportResult::Succeeded { file, count } => format!(
                "Export '{}' for {} succeeded: {} items in {}",
                self.exporter, self.as_of_date, count, file
            ),
            ExportResult::Failed { error } => format!(
                "Export '{}' for {} failed: {}",
                self.exporter, self.as_of_date, error
            ),
        }
    }

    /// Log the report
    pub fn log_summary(&self) {
        match &self.result {
            ExportResult::Succeeded { file, count } => tracing::info!(
                run_id = %self.run_id,
                exporter = %self.exporter,
                as_of_date = %self.as_of_date,
                file = %file,
                count = count,
                duration_ms = self.duration.as_millis(),
                "Export succeeded"
            ),
            ExportResult::Failed { error } => {
                tracing::warn!(
                    run_id = %self.run_id,
                    exporter = %self.exporter,
                    as_of_date = %self.as_of_date,
                    duration_ms = self.duration.as_millis(),
                    "Export failed"
                );
                for line in error.lines() {
                    tracing::warn!(run_id = %self.run_id, message = %line, "Export error");
                }
            }
        }
    }
}
