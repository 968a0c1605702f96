// Export Agent - Export orchestration for CSV storage targets
// Copyright (c) 2025 Export Agent Contributors
// Licensed under the MIT License

//! # Export Agent
//!
//! Export Agent orchestrates data exports to storage targets. It runs
//! single-item exporters that turn one data source into one CSV file, and
//! group exporters that run several children concurrently and record their
//! combined outcome as metadata.
//!
//! ## Architecture
//!
//! Export Agent follows a layered architecture:
//!
//! - [`core`] - Export orchestration (single-item, group, registry, runner)
//! - [`adapters`] - Collaborators (local storage, CSV files, manifests, notifiers)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use export_agent::adapters::csv::CsvFileExporter;
//! use export_agent::adapters::notification::TracingNotifier;
//! use export_agent::adapters::storage::LocalStorageWriter;
//! use export_agent::config::load_config;
//! use export_agent::core::export::{
//!     CsvStorageExporter, ExportDataSource, ExportRunner, ExporterSettings,
//! };
//! use export_agent::domain::{ExportExecutionContext, Result};
//! use serde::Serialize;
//! use std::sync::Arc;
//!
//! #[derive(Serialize)]
//! struct Trade {
//!     id: u64,
//!     symbol: String,
//! }
//!
//! struct TradeSource;
//!
//! #[async_trait]
//! impl ExportDataSource for TradeSource {
//!     type Item = Trade;
//!
//!     fn item_type(&self) -> &str {
//!         "trades"
//!     }
//!
//!     async fn prepare_data(&self, _context: &ExportExecutionContext) -> Result<Option<Vec<Trade>>> {
//!         Ok(Some(vec![Trade { id: 1, symbol: "AAPL".to_string() }]))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("export-agent.toml")?;
//!
//!     let file_exporter = CsvFileExporter::from_config(
//!         &config.export,
//!         Arc::new(LocalStorageWriter::new()),
//!     )?;
//!     let exporter = CsvStorageExporter::new(
//!         TradeSource,
//!         Arc::new(file_exporter),
//!         ExporterSettings::new("trades"),
//!     );
//!
//!     let context = ExportExecutionContext::new(chrono::Utc::now().date_naive());
//!     let report = ExportRunner::new(Arc::new(TracingNotifier))
//!         .execute(&exporter, &context, &config.storage_targets)
//!         .await;
//!
//!     println!("{}", report.headline());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Export Agent uses the [`domain::AgentError`] type for all errors. Expected
//! export failures are not errors: they are returned as a failed
//! [`domain::ExportResult`].
//!
//! ## Logging
//!
//! Export Agent uses structured logging with the `tracing` crate; see
//! [`logging::init_logging`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
