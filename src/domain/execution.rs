//! Export execution context
//!
//! The context describes *what* to export and *as of when*. It is owned by the
//! caller and only ever read by exporters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input describing an export run
///
/// # Examples
///
/// ```
/// use export_agent::domain::ExportExecutionContext;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let context = ExportExecutionContext::new(as_of)
///     .with_parameter("desk", "rates");
///
/// assert_eq!(context.parameter("desk"), Some("rates"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportExecutionContext {
    /// The as-of date the exported data refers to
    pub as_of_date: NaiveDate,

    /// Arbitrary contextual parameters
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl ExportExecutionContext {
    /// Create a context for the given as-of date with no parameters
    pub fn new(as_of_date: NaiveDate) -> Self {
        Self {
            as_of_date,
            parameters: BTreeMap::new(),
        }
    }

    /// Add a parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// JSON rendering used in log and failure messages
    pub fn to_json(&self) -> String {
        // A date and a string map always serialize
        serde_json::to_string(self)
            .unwrap_or_else(|_| format!("{{\"as_of_date\":\"{}\"}}", self.as_of_date))
    }
}
