//! Valuation types

use crate::model::{OptionKind, PricingInputs};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Scan-wide inputs shared by every contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationContext {
    /// Underlying spot price
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility used when a contract quotes none
    pub default_volatility: f64,
    /// Date the chain was observed
    pub reference_date: NaiveDate,
}

/// A contract whose market price is below its theoretical value
///
/// Field names match the stored record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Evaluation timestamp
    #[serde(rename = "RecordId")]
    pub record_id: DateTime<Utc>,
    #[serde(rename = "UnderlyingTicker")]
    pub underlying: String,
    /// Synthesized option symbol
    #[serde(rename = "OptionTicker")]
    pub option_symbol: String,
    #[serde(rename = "Type")]
    pub kind: OptionKind,
    /// Inputs the theoretical price was computed from
    #[serde(flatten)]
    pub inputs: PricingInputs,
    /// Bid/ask midpoint
    #[serde(rename = "MarketPrice")]
    pub market_price: f64,
    #[serde(rename = "BlackScholesPrice")]
    pub theoretical_price: f64,
    /// Theoretical minus market, always positive
    #[serde(rename = "Undervaluation")]
    pub undervaluation: f64,
}
