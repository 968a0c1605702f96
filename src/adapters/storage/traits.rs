//! Storage abstraction traits

use crate::domain::{Result, StorageTarget};
use async_trait::async_trait;

/// Writes files to storage targets
#[async_trait]
pub trait StorageWriter: Send + Sync {
    /// Write `contents` as `file_name` on `target`
    ///
    /// # Returns
    ///
    /// Returns the location the file was stored at.
    ///
    /// # Errors
    ///
    /// Returns an error if the target cannot be reached or the write fails.
    async fn write(&self, target: &StorageTarget, file_name: &str, contents: &[u8])
        -> Result<String>;
}
