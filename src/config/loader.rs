//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AgentConfig;
use crate::domain::errors::AgentError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix of environment variables overriding configuration values
pub const ENV_PREFIX: &str = "EXPORT_AGENT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AgentConfig
/// 4. Applies environment variable overrides (EXPORT_AGENT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use export_agent::config::loader::load_config;
///
/// let config = load_config("export-agent.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AgentConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AgentError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AgentError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Applies the same substitution, overrides and validation as [`load_config`].
pub fn load_config_from_str(contents: &str) -> Result<AgentConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: AgentConfig = toml::from_str(&contents)
        .map_err(|e| AgentError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        AgentError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AgentError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed_line = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|missing| missing == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AgentError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{key}")).ok()
}

/// Applies environment variable overrides using the EXPORT_AGENT_* prefix
///
/// Variables follow the pattern EXPORT_AGENT_<SECTION>_<KEY>, for example
/// EXPORT_AGENT_APPLICATION_LOG_LEVEL or EXPORT_AGENT_EXPORT_CSV_DELIMITER.
/// Unparseable boolean values leave the setting unchanged.
fn apply_env_overrides(config: &mut AgentConfig) {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("EXPORT_FILE_DATE_FORMAT") {
        config.export.file_date_format = val;
    }
    if let Some(val) = env_override("EXPORT_CSV_DELIMITER") {
        config.export.csv_delimiter = val;
    }
    if let Some(val) = env_override("EXPORT_CSV_INCLUDE_HEADERS") {
        if let Ok(include) = val.parse() {
            config.export.csv_include_headers = include;
        }
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}
