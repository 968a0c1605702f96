//! Configuration management for the export agent.
//!
//! This module provides TOML-based configuration loading, parsing and
//! validation.
//!
//! # Overview
//!
//! The configuration file supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `EXPORT_AGENT_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use export_agent::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("export-agent.toml")?;
//!
//! for target in &config.storage_targets {
//!     println!("Exporting to {} ({})", target.name, target.location);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ExportConfig`] - File naming and CSV format
//! - [`StorageTarget`](crate::domain::StorageTarget) - `[[storage_targets]]` entries
//! - [`GroupConfig`] - `[[groups]]` entries
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [export]
//! file_date_format = "%Y%m%d"
//! csv_delimiter = ","
//! csv_include_headers = true
//!
//! [[storage_targets]]
//! name = "archive"
//! location = "/mnt/archive/exports"
//! credentials = "${EXPORT_AGENT_ARCHIVE_TOKEN}"
//!
//! [[groups]]
//! name = "daily-positions"
//! export_file_prefix = "positions"
//! children = ["trades", "holdings"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/export-agent"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::{load_config, load_config_from_str};
pub use schema::{AgentConfig, ApplicationConfig, ExportConfig, GroupConfig, LoggingConfig};
pub use secret::{secret_string, SecretString, SecretValue};
