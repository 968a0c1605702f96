//! Integration tests for configuration loading and validation

use export_agent::adapters::csv::{CsvFileExporter, CsvSettings};
use export_agent::adapters::storage::LocalStorageWriter;
use export_agent::config::{load_config, load_config_from_str};
use export_agent::core::export::GroupExporterSettings;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

// Serializes tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("EXPORT_AGENT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("EXPORT_AGENT_EXPORT_CSV_DELIMITER");
    std::env::remove_var("EXPORT_AGENT_EXPORT_CSV_INCLUDE_HEADERS");
    std::env::remove_var("EXPORT_AGENT_LOGGING_LOCAL_ROTATION");
    std::env::remove_var("TEST_ARCHIVE_TOKEN");
}

const COMPLETE_TOML: &str = r#"
[application]
log_level = "debug"

[export]
file_date_format = "%Y-%m-%d"
csv_delimiter = ";"
csv_include_headers = false

[[storage_targets]]
name = "local"
location = "/var/exports"

[[storage_targets]]
name = "archive"
location = "/mnt/archive"
credentials = "${TEST_ARCHIVE_TOKEN}"

[storage_targets.properties]
tier = "cold"

[[groups]]
name = "daily-positions"
export_file_prefix = "positions"
children = ["trades", "holdings"]

[[groups]]
name = "reference-data"
export_file_prefix = "reference"
children = ["instruments"]

[logging]
local_enabled = false
local_path = "/tmp/export-agent"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_ARCHIVE_TOKEN", "sas-token-123");

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(COMPLETE_TOML.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.export.file_date_format, "%Y-%m-%d");
    assert!(!config.export.csv_include_headers);

    assert_eq!(config.storage_targets.len(), 2);
    let archive = &config.storage_targets[1];
    assert_eq!(archive.name, "archive");
    assert_eq!(
        archive.credentials.as_ref().unwrap().expose_secret(),
        "sas-token-123"
    );
    assert_eq!(archive.properties.get("tier").map(String::as_str), Some("cold"));

    assert_eq!(config.groups.len(), 2);
    let settings = GroupExporterSettings::from(config.group("daily-positions").unwrap());
    assert_eq!(settings.export_file_prefix, "positions");
    assert_eq!(
        settings
            .child_exporters
            .iter()
            .map(|key| key.as_str())
            .collect::<Vec<_>>(),
        vec!["trades", "holdings"]
    );

    assert_eq!(config.logging.local_rotation, "hourly");

    cleanup_env_vars();
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let config = load_config_from_str(
        r#"
[[storage_targets]]
name = "local"
location = "/var/exports"
"#,
    )
    .unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.export.file_date_format, "%Y%m%d");
    assert_eq!(config.export.csv_delimiter, ",");
    assert!(config.export.csv_include_headers);
    assert!(config.groups.is_empty());
    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "daily");

    let settings = CsvSettings::from_config(&config.export).unwrap();
    assert_eq!(settings, CsvSettings::default());
    assert!(CsvFileExporter::from_config(&config.export, Arc::new(LocalStorageWriter::new())).is_ok());
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let err = load_config_from_str(COMPLETE_TOML).unwrap_err();

    assert!(err.to_string().contains("TEST_ARCHIVE_TOKEN"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_ARCHIVE_TOKEN", "sas-token-123");
    std::env::set_var("EXPORT_AGENT_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("EXPORT_AGENT_EXPORT_CSV_DELIMITER", "|");
    std::env::set_var("EXPORT_AGENT_EXPORT_CSV_INCLUDE_HEADERS", "true");
    std::env::set_var("EXPORT_AGENT_LOGGING_LOCAL_ROTATION", "daily");

    let config = load_config_from_str(COMPLETE_TOML).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.export.csv_delimiter, "|");
    assert!(config.export.csv_include_headers);
    assert_eq!(config.logging.local_rotation, "daily");

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_ARCHIVE_TOKEN", "sas-token-123");
    std::env::set_var("EXPORT_AGENT_APPLICATION_LOG_LEVEL", "loud");

    let err = load_config_from_str(COMPLETE_TOML).unwrap_err();

    assert!(err.to_string().contains("Invalid log_level 'loud'"));
    cleanup_env_vars();
}

#[test]
fn test_invalid_config_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let cases = [
        (
            r#"
[[storage_targets]]
name = "local"
location = "/a"

[[storage_targets]]
name = "local"
location = "/b"
"#,
            "Duplicate storage target name",
        ),
        (
            r#"
[[storage_targets]]
name = "local"
location = "/a"

[[groups]]
name = "empty"
export_file_prefix = "empty"
children = []
"#,
            "groups.children cannot be empty",
        ),
        (
            r#"
[export]
csv_delimiter = "::"

[[storage_targets]]
name = "local"
location = "/a"
"#,
            "csv_delimiter",
        ),
        (
            r#"
[export]
file_date_format = "%Q"

[[storage_targets]]
name = "local"
location = "/a"
"#,
            "export.file_date_format: Configuration error: Invalid date format '%Q'",
        ),
    ];

    for (toml, expected) in cases {
        let err = load_config_from_str(toml).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }
}
