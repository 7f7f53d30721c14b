//! Scan error type

use crate::chain::DataSourceError;
use crate::model::{DateFormatError, DomainError};
use crate::storage::StorageError;
use thiserror::Error;

/// Any failure that aborts a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// Chain retrieval failed
    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),
    /// A date could not be parsed
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),
    /// Pricing inputs were invalid
    #[error("invalid pricing inputs: {0}")]
    Domain(#[from] DomainError),
    /// Persisting a result failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
