//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registry key identifying a group item exporter
///
/// Group exporters declare the keys of the children they expect, and the
/// [`ExporterRegistry`](crate::core::export::ExporterRegistry) matches
/// registrations by exact key equality. Keys are non-empty and made of ASCII
/// letters, digits, `-`, `_` and `.`.
///
/// # Examples
///
/// ```
/// use export_agent::domain::ids::ExporterKey;
/// use std::str::FromStr;
///
/// let key = ExporterKey::from_str("trades").unwrap();
/// assert_eq!(key.as_str(), "trades");
///
/// assert!(ExporterKey::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExporterKey(String);

impl ExporterKey {
    /// Creates a new ExporterKey from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ExporterKey)` if the key is valid, `Err` otherwise
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err("Exporter key cannot be empty".to_string());
        }

        if let Some(invalid) = key
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(format!(
                "Invalid exporter key '{key}': character '{invalid}' is not allowed"
            ));
        }

        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExporterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExporterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExporterKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExporterKey> for String {
    fn from(key: ExporterKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ExporterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_key_valid() {
        let key = ExporterKey::new("fx-rates_v2.daily").unwrap();
        assert_eq!(key.as_str(), "fx-rates_v2.daily");
        assert_eq!(key.to_string(), "fx-rates_v2.daily");
    }

    #[test]
    fn test_exporter_key_empty() {
        assert!(ExporterKey::new("").is_err());
        assert!(ExporterKey::new("   ").is_err());
    }

    #[test]
    fn test_exporter_key_invalid_characters() {
        let err = ExporterKey::new("trades/holdings").unwrap_err();
        assert!(err.contains('/'));
        assert!(ExporterKey::from_str("a b").is_err());
    }

    #[test]
    fn test_exporter_key_serde_is_transparent() {
        let key = ExporterKey::new("holdings").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"holdings\"");

        let back: ExporterKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn test_exporter_key_deserialize_validates() {
        assert!(serde_json::from_str::<ExporterKey>("\"a b\"").is_err());
        assert!(serde_json::from_str::<ExporterKey>("\"\"").is_err());
        assert!(serde_json::from_str::<Vec<ExporterKey>>(r#"["trades", "bad/key"]"#).is_err());
    }
}
