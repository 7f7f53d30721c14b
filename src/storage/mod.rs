//! Result storage module
//!
//! Write-only sinks for flagged valuations

mod jsonl;
mod memory;

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;

use crate::valuation::ValuationResult;
use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Record could not be encoded
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Trait for result sinks
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist one flagged result
    async fn insert(&self, result: &ValuationResult) -> Result<(), StorageError>;
}
