//! Option chain retrieval module
//!
//! Fetches the priced option chain for an underlying on a given date

mod dolthub;
mod types;

pub use dolthub::{DoltHubClient, DoltHubConfig, DOLTHUB_API_URL};
pub use types::{DataSourceError, OptionContract};

use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for option chain providers
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Fetch every contract quoted for `ticker` on `date`.
    ///
    /// An empty chain is not an error.
    async fn fetch_chain(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Vec<OptionContract>, DataSourceError>;
}
