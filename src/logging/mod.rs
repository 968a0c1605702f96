//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted log files
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use export_agent::logging::init_logging;
//! use export_agent::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Export agent started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```
/// use export_agent::log_export_start;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// log_export_start!("daily-positions", as_of);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($exporter:expr, $as_of:expr) => {
        tracing::info!(
            exporter = %$exporter,
            as_of_date = %$as_of,
            "Starting export"
        );
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```
/// use export_agent::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_millis(1500));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```
/// use export_agent::log_error_with_context;
/// use export_agent::domain::AgentError;
///
/// let error = AgentError::DataSource("source offline".to_string());
/// log_error_with_context!(&error, "Export 'trades' failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
