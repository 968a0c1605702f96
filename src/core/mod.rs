//! Core business logic of the export agent.
//!
//! # Modules
//!
//! - [`export`] - Single-item and group exporters, registry and runner
//!
//! # Export Workflow
//!
//! A single-item run:
//!
//! 1. **Prepare**: Ask the data source for the items of the as-of date
//! 2. **Options**: Use the source's options or the default prefix and targets
//! 3. **Export**: Hand the items to the file exporter
//!
//! A group run:
//!
//! 1. **Select**: Pick the registered children matching the group's keys
//! 2. **Check**: Fail without running anything when children are missing
//! 3. **Fan out**: Run every child concurrently and wait for all of them
//! 4. **Metadata**: Let the group record the combined results
//! 5. **Report**: Succeed with the metadata, or fail with the children's errors
//!
//! # Example
//!
//! ```rust,no_run
//! use export_agent::adapters::manifest::ManifestGroup;
//! use export_agent::adapters::notification::TracingNotifier;
//! use export_agent::adapters::storage::LocalStorageWriter;
//! use export_agent::core::export::{
//!     CsvStorageGroupExporter, ExportRunner, ExporterRegistry, GroupExporterSettings,
//! };
//! use export_agent::domain::{ExportExecutionContext, ExporterKey, StorageTarget};
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Arc::new(ExporterRegistry::new());
//! let settings = GroupExporterSettings::new(
//!     "daily-positions",
//!     "positions",
//!     vec![ExporterKey::new("trades")?],
//! );
//! let group = ManifestGroup::new(Arc::new(LocalStorageWriter::new()), "%Y%m%d")?;
//! let exporter = CsvStorageGroupExporter::new(group, registry, settings);
//!
//! let context = ExportExecutionContext::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//! let targets = vec![StorageTarget::new("local", "/var/exports")];
//!
//! let report = ExportRunner::new(Arc::new(TracingNotifier))
//!     .execute(&exporter, &context, &targets)
//!     .await;
//!
//! println!("{}", report.headline());
//! # Ok(())
//! # }
//! ```

pub mod export;
