//! In-memory store

use super::{ResultStore, StorageError};
use crate::valuation::ValuationResult;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps results in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ValuationResult>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored records in insertion order
    pub async fn records(&self) -> Vec<ValuationResult> {
        self.records.read().await.clone()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn insert(&self, result: &ValuationResult) -> Result<(), StorageError> {
        self.records.write().await.push(result.clone());
        Ok(())
    }
}
