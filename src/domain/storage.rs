//! Storage target descriptors

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A destination that exported files are written to
///
/// Location and credentials are opaque to the orchestration layer: exporters
/// only forward targets to the storage collaborators, which interpret them.
/// Credentials are redacted from `Debug` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageTarget {
    /// Human readable name, unique within a configuration
    pub name: String,

    /// Location understood by the storage writer (a directory for local storage)
    pub location: String,

    /// Optional credentials for the target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<SecretString>,

    /// Free-form writer specific properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl StorageTarget {
    /// Create a target without credentials or properties
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            credentials: None,
            properties: BTreeMap::new(),
        }
    }

    /// Attach credentials
    pub fn with_credentials(mut self, credentials: SecretString) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}
