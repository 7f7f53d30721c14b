//! Option chain types

use crate::model::{DateFormatError, OptionKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A quoted option contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Underlying ticker
    pub underlying: String,
    /// Strike price
    pub strike: Decimal,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Call or put
    pub kind: OptionKind,
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// Implied volatility quoted by the source, if any
    pub implied_volatility: Option<Decimal>,
}

impl OptionContract {
    /// Bid/ask midpoint, `None` if the sum overflows `Decimal`
    pub fn mid_price(&self) -> Option<Decimal> {
        self.bid.checked_add(self.ask)?.checked_div(Decimal::TWO)
    }
}

/// Option chain retrieval errors
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// Transport failure or timeout
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("data source returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Response body could not be decoded
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The remote query failed
    #[error("query failed: {0}")]
    Query(String),
    /// Ticker contains characters that cannot be queried safely
    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),
    /// Row carries an unparseable date
    #[error("malformed row date: {0}")]
    Date(#[from] DateFormatError),
}
