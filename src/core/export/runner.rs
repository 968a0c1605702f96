//! Export runner
//!
//! The outer layer around an [`Exporter`]: it times the run, turns an error
//! escaping the exporter into a failed [`ExportResult`], and hands the
//! resulting [`ExportReport`] to a [`ReportNotifier`]. Callers of the runner
//! always get a report back.

use crate::adapters::notification::ReportNotifier;
use crate::core::export::summary::ExportReport;
use crate::core::export::traits::Exporter;
use crate::domain::{ExportExecutionContext, ExportResult, StorageTarget};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Runs exporters and reports their outcome
pub struct ExportRunner {
    notifier: Arc<dyn ReportNotifier>,
}

impl ExportRunner {
    /// Create a runner that reports to `notifier`
    pub fn new(notifier: Arc<dyn ReportNotifier>) -> Self {
        Self { notifier }
    }

    /// Run `exporter` once and report the outcome
    pub async fn execute(
        &self,
        exporter: &dyn Exporter,
        context: &ExportExecutionContext,
        storage_targets: &[StorageTarget],
    ) -> ExportReport {
        let started_at = Utc::now();
        let start = Instant::now();

        crate::log_export_start!(exporter.name(), context.as_of_date);

        let result = match exporter.run(context, storage_targets).await {
            Ok(result) => result,
            Err(e) => {
                crate::log_error_with_context!(
                    &e,
                    format!("Export '{}' raised an error", exporter.name())
                );
                ExportResult::fail(e.to_string())
            }
        };

        let report = ExportReport::new(exporter.name(), context.as_of_date, started_at, result)
            .with_duration(start.elapsed());

        crate::log_export_complete!(report.result.count(), report.duration);
        report.log_summary();

        if let Err(e) = self.notifier.notify(&report).await {
            tracing::warn!(
                run_id = %report.run_id,
                error = %e,
                "Failed to send export notification"
            );
        }

        report
    }
}
