//! Terminal outcome of an export run

use serde::{Deserialize, Serialize};

/// Outcome of an export run
///
/// Either the run produced an artifact (and an item count) or it failed with
/// an error message; a result never carries both. Results are created once at
/// the end of a run and are not mutated afterwards.
///
/// # Examples
///
/// ```
/// use export_agent::domain::ExportResult;
///
/// let ok = ExportResult::success("trades_20240131.csv", 120);
/// assert!(!ok.has_error());
/// assert_eq!(ok.count(), 120);
///
/// let failed = ExportResult::fail("Invalid data from the source.");
/// assert!(failed.has_error());
/// assert_eq!(failed.file(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExportResult {
    /// The run produced `file` containing `count` items
    Succeeded {
        /// Reference to the produced artifact or metadata file
        file: String,
        /// Number of items exported
        count: usize,
    },
    /// The run failed
    Failed {
        /// Error message
        error: String,
    },
}

impl ExportResult {
    /// Successful result
    pub fn success(file: impl Into<String>, count: usize) -> Self {
        Self::Succeeded {
            file: file.into(),
            count,
        }
    }

    /// Failed result
    pub fn fail(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Whether the run failed
    pub fn has_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Whether the run succeeded
    pub fn is_success(&self) -> bool {
        !self.has_error()
    }

    /// Error message of a failed run
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            Self::Succeeded { .. } => None,
        }
    }

    /// Artifact reference of a successful run
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Succeeded { file, .. } => Some(file),
            Self::Failed { .. } => None,
        }
    }

    /// Item count, zero for failed runs
    pub fn count(&self) -> usize {
        match self {
            Self::Succeeded { count, .. } => *count,
            Self::Failed { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let result = ExportResult::success("holdings_20240131.csv", 42);

        assert!(result.is_success());
        assert!(!result.has_error());
        assert_eq!(result.file(), Some("holdings_20240131.csv"));
        assert_eq!(result.count(), 42);
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_failed_result() {
        let result = ExportResult::fail("connection reset");

        assert!(result.has_error());
        assert_eq!(result.error(), Some("connection reset"));
        assert_eq!(result.file(), None);
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_value(ExportResult::success("a.csv", 3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "succeeded", "file": "a.csv", "count": 3})
        );

        let json = serde_json::to_value(ExportResult::fail("boom")).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "error": "boom"}));
    }
}
