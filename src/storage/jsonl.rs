//! JSON Lines file store

use super::{ResultStore, StorageError};
use crate::valuation::ValuationResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Appends one JSON object per line to a file
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Create a store writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Output file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ResultStore for JsonlStore {
    async fn insert(&self, result: &ValuationResult) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let mut line = serde_json::to_vec(result)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;

        tracing::debug!(
            path = %self.path.display(),
            option = %result.option_symbol,
            "Stored valuation"
        );
        Ok(())
    }
}
