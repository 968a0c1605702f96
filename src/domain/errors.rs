//! Domain error types
//!
//! This module defines the error hierarchy for the export agent. Errors never
//! expose third-party types; foreign errors are converted into [`AgentError`]
//! variants carrying their message.

use thiserror::Error;

/// Main export agent error type
///
/// Returned by every fallible operation in the crate. Note that an export
/// which *ran* and failed is reported as a failed
/// [`ExportResult`](crate::domain::ExportResult), not as an `AgentError`.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors raised while preparing source data
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Storage target errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Notification delivery errors
    #[error("Notification error: {0}")]
    Notification(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for AgentError {
    fn from(err: std::io::Error) -> Self {
        AgentError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for AgentError {
    fn from(err: csv::Error) -> Self {
        AgentError::Serialization(format!("CSV error: {err}"))
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AgentError {
    fn from(err: toml::de::Error) -> Self {
        AgentError::Configuration(format!("TOML parse error: {err}"))
    }
}
