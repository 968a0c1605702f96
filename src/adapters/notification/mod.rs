//! Export report notifications
//!
//! Notifiers receive the [`ExportReport`] of every run executed through the
//! [`ExportRunner`](crate::core::export::ExportRunner). They are for
//! observability only: a notifier failure never changes the run's outcome.

use crate::core::export::summary::ExportReport;
use crate::domain::Result;
use async_trait::async_trait;

/// Receives export reports
#[async_trait]
pub trait ReportNotifier: Send + Sync {
    /// Deliver one report
    ///
    /// # Errors
    ///
    /// Returns an error if the report could not be delivered.
    async fn notify(&self, report: &ExportReport) -> Result<()>;
}

/// Notifier that writes reports to the tracing log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl ReportNotifier for TracingNotifier {
    async fn notify(&self, report: &ExportReport) -> Result<()> {
        if report.is_successful() {
            tracing::info!(
                target: "export_agent::notification",
                run_id = %report.run_id,
                "{}",
                report.headline()
            );
        } else {
            tracing::warn!(
                target: "export_agent::notification",
                run_id = %report.run_id,
                "{}",
                report.headline()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExportResult;
    use chrono::{NaiveDate, Utc};

    #[tokio::test]
    async fn test_tracing_notifier_never_fails() {
        let report = ExportReport::new(
            "holdings",
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            Utc::now(),
            ExportResult::fail("a broke\nb broke"),
        );

        assert!(TracingNotifier.notify(&report).await.is_ok());
    }
}
