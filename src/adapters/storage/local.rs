//! Local filesystem storage writer
//!
//! Treats [`StorageTarget::location`] as a directory. The directory is
//! created on first write.

use crate::adapters::storage::traits::StorageWriter;
use crate::domain::context::ResultExt;
use crate::domain::{AgentError, Result, StorageTarget};
use async_trait::async_trait;
use std::path::Path;

/// Writes files into local directories
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageWriter;

impl LocalStorageWriter {
    /// Create a new local writer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StorageWriter for LocalStorageWriter {
    async fn write(
        &self,
        target: &StorageTarget,
        file_name: &str,
        contents: &[u8],
    ) -> Result<String> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(AgentError::Storage(format!(
                "Invalid file name '{file_name}' for storage target '{}'",
                target.name
            )));
        }

        let directory = Path::new(&target.location);
        tokio::fs::create_dir_all(directory)
            .await
            .with_context(|| {
                format!(
                    "Failed to create directory {} for storage target '{}'",
                    directory.display(),
                    target.name
                )
            })?;

        let path = directory.join(file_name);
        tokio::fs::write(&path, contents).await.with_context(|| {
            format!(
                "Failed to write {} to storage target '{}'",
                path.display(),
                target.name
            )
        })?;

        tracing::debug!(
            target_name = %target.name,
            path = %path.display(),
            bytes = contents.len(),
            "Wrote file to local storage"
        );

        Ok(path.to_string_lossy().to_string())
    }
}
