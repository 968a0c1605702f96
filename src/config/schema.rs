//! Configuration schema types
//!
//! This module defines the configuration structure of the export agent.

use crate::core::export::GroupExporterSettings;
use crate::domain::ids::ExporterKey;
use crate::domain::{validate_date_format, StorageTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main export agent configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export file settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Destinations every export is written to
    #[serde(default)]
    pub storage_targets: Vec<StorageTarget>,

    /// Group exporter definitions
    #[serde(default)]
    pub groups: Vec<GroupConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AgentConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.export.validate()?;

        if self.storage_targets.is_empty() {
            return Err("At least one storage target must be configured".to_string());
        }

        let mut target_names = HashSet::new();
        for target in &self.storage_targets {
            if target.name.trim().is_empty() {
                return Err("storage_targets.name cannot be empty".to_string());
            }
            if target.location.trim().is_empty() {
                return Err(format!(
                    "storage_targets.location cannot be empty for target '{}'",
                    target.name
                ));
            }
            if !target_names.insert(target.name.as_str()) {
                return Err(format!("Duplicate storage target name '{}'", target.name));
            }
        }

        let mut group_names = HashSet::new();
        for group in &self.groups {
            group.validate()?;
            if !group_names.insert(group.name.as_str()) {
                return Err(format!("Duplicate group name '{}'", group.name));
            }
        }

        self.logging.validate()?;
        Ok(())
    }

    /// Looks up a group definition by name
    pub fn group(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|group| group.name == name)
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export file configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// chrono format of the as-of date in file names
    #[serde(default = "default_file_date_format")]
    pub file_date_format: String,

    /// CSV field delimiter, a single ASCII character
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: String,

    /// Write a header row to CSV files
    #[serde(default = "default_true")]
    pub csv_include_headers: bool,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.file_date_format.trim().is_empty() {
            return Err("export.file_date_format cannot be empty".to_string());
        }
        validate_date_format(&self.file_date_format)
            .map_err(|e| format!("export.file_date_format: {e}"))?;

        match self.csv_delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(()),
            _ => Err(format!(
                "export.csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_date_format: default_file_date_format(),
            csv_delimiter: default_csv_delimiter(),
            csv_include_headers: true,
        }
    }
}

/// Group exporter definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Group name, unique within the configuration
    pub name: String,

    /// Prefix of the group's file names
    pub export_file_prefix: String,

    /// Keys of the child exporters the group expects at runtime
    pub children: Vec<ExporterKey>,
}

impl GroupConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("groups.name cannot be empty".to_string());
        }
        if self.export_file_prefix.trim().is_empty() {
            return Err(format!(
                "groups.export_file_prefix cannot be empty for group '{}'",
                self.name
            ));
        }
        if self.children.is_empty() {
            return Err(format!(
                "groups.children cannot be empty for group '{}'",
                self.name
            ));
        }
        Ok(())
    }
}

impl From<&GroupConfig> for GroupExporterSettings {
    fn from(config: &GroupConfig) -> Self {
        GroupExporterSettings::new(
            config.name.clone(),
            config.export_file_prefix.clone(),
            config.children.clone(),
        )
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_file_date_format() -> String {
    "%Y%m%d".to_string()
}

fn default_csv_delimiter() -> String {
    ",".to_string()
}

fn default_local_path() -> String {
    "/var/log/export-agent".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
