//! Domain models and types for the export agent.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Run inputs** ([`ExportExecutionContext`], [`StorageTarget`])
//! - **Per-run configuration** ([`ExporterOptions`])
//! - **Run outcome** ([`ExportResult`])
//! - **Registry identifiers** ([`ExporterKey`])
//! - **Error types** ([`AgentError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T, AgentError>`]. A run that executed
//! but failed is *data*, not an error: it is reported as
//! [`ExportResult::Failed`].
//!
//! ```rust
//! use export_agent::domain::{ExportResult, Result};
//!
//! fn summarize(result: &ExportResult) -> Result<String> {
//!     Ok(match result.error() {
//!         Some(error) => format!("failed: {error}"),
//!         None => format!("exported {} items", result.count()),
//!     })
//! }
//! ```

pub mod context;
pub mod errors;
pub mod execution;
pub mod export_result;
pub mod ids;
pub mod options;
pub mod result;
pub mod storage;

// Re-export commonly used types for convenience
pub use errors::AgentError;
pub use execution::ExportExecutionContext;
pub use export_result::ExportResult;
pub use ids::ExporterKey;
pub use options::{validate_date_format, ExporterOptions};
pub use result::Result;
pub use storage::StorageTarget;
