//! DoltHub SQL API client for option chains
//!
//! Queries the `option_chain` table of a DoltHub database. The API answers
//! with a JSON envelope whose `rows` hold every column as a string.

use super::{ChainSource, DataSourceError, OptionContract};
use crate::model::{parse_date, OptionKind};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// DoltHub SQL API base URL
pub const DOLTHUB_API_URL: &str = "https://www.dolthub.com/api/v1alpha1";

/// Configuration for the DoltHub client
#[derive(Debug, Clone)]
pub struct DoltHubConfig {
    /// Base URL for the SQL API
    pub base_url: String,
    /// Repository owner
    pub owner: String,
    /// Database name
    pub database: String,
    /// Branch to query
    pub branch: String,
    /// Maximum rows per query
    pub row_limit: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for DoltHubConfig {
    fn default() -> Self {
        Self {
            base_url: DOLTHUB_API_URL.to_string(),
            owner: "post-no-preference".to_string(),
            database: "options".to_string(),
            branch: "master".to_string(),
            row_limit: 100,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Client for the DoltHub SQL API
pub struct DoltHubClient {
    config: DoltHubConfig,
    client: Client,
}

impl DoltHubClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, DataSourceError> {
        Self::with_config(DoltHubConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: DoltHubConfig) -> Result<Self, DataSourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Endpoint for SQL reads against the configured branch
    fn endpoint(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.owner,
            self.config.database,
            self.config.branch
        )
    }

    /// SQL selecting the chain for one ticker and date
    fn chain_query(&self, ticker: &str, date: NaiveDate) -> Result<String, DataSourceError> {
        validate_ticker(ticker)?;
        Ok(format!(
            "SELECT * FROM option_chain WHERE act_symbol = '{}' AND date = '{}' LIMIT {}",
            ticker,
            date.format("%Y-%m-%d"),
            self.config.row_limit
        ))
    }
}

#[async_trait]
impl ChainSource for DoltHubClient {
    async fn fetch_chain(
        &self,
        ticker: &str,
        date: NaiveDate,
    ) -> Result<Vec<OptionContract>, DataSourceError> {
        let url = self.endpoint();
        let sql = self.chain_query(ticker, date)?;

        tracing::debug!(url = %url, sql = %sql, "Querying DoltHub option chain");

        let response = self.client.get(&url).query(&[("q", &sql)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, "DoltHub request failed");
            return Err(DataSourceError::Status { status, body });
        }

        let body = response.text().await?;
        tracing::debug!(body = %body, "Raw DoltHub response");

        parse_chain(&body, ticker, date)
    }
}

/// SQL API response envelope
#[derive(Debug, Deserialize)]
struct SqlResponse {
    #[serde(default)]
    query_execution_status: String,
    #[serde(default)]
    query_execution_message: Option<String>,
    #[serde(default)]
    rows: Option<Vec<RawOptionRow>>,
}

/// One `option_chain` row as returned by the API
#[derive(Debug, Deserialize)]
struct RawOptionRow {
    #[serde(default)]
    act_symbol: Option<String>,
    expiration: String,
    strike: String,
    call_put: String,
    bid: String,
    ask: String,
    #[serde(default)]
    vol: Option<String>,
}

/// Decode a response body into contracts
fn parse_chain(
    body: &str,
    ticker: &str,
    date: NaiveDate,
) -> Result<Vec<OptionContract>, DataSourceError> {
    let response: SqlResponse = serde_json::from_str(body)
        .map_err(|e| DataSourceError::Malformed(format!("{}: {}", e, truncate(body, 200))))?;

    match response.query_execution_status.as_str() {
        "Success" | "RowLimit" => {}
        "Error" => {
            let message = response
                .query_execution_message
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(DataSourceError::Query(message));
        }
        other => {
            tracing::warn!(
                ticker,
                %date,
                status = other,
                "No successful data returned"
            );
            return Ok(Vec::new());
        }
    }

    let Some(rows) = response.rows else {
        tracing::warn!(ticker, %date, "Response carried no rows");
        return Ok(Vec::new());
    };

    rows.into_iter()
        .map(|row| row.into_contract(ticker))
        .collect()
}

impl RawOptionRow {
    fn into_contract(self, ticker: &str) -> Result<OptionContract, DataSourceError> {
        let kind = match self.call_put.as_str() {
            "Call" => OptionKind::Call,
            "Put" => OptionKind::Put,
            other => {
                return Err(DataSourceError::Malformed(format!(
                    "unknown call_put value {:?}",
                    other
                )))
            }
        };

        let implied_volatility = match self.vol.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(v) => Some(parse_decimal("vol", v)?),
        };

        Ok(OptionContract {
            underlying: self.act_symbol.unwrap_or_else(|| ticker.to_string()),
            strike: parse_decimal("strike", &self.strike)?,
            expiration: parse_date(&self.expiration)?,
            kind,
            bid: parse_decimal("bid", &self.bid)?,
            ask: parse_decimal("ask", &self.ask)?,
            implied_volatility,
        })
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, DataSourceError> {
    Decimal::from_str(value.trim())
        .map_err(|e| DataSourceError::Malformed(format!("{} {:?}: {}", field, value, e)))
}

/// Tickers are interpolated into SQL, so only symbol characters pass
fn validate_ticker(ticker: &str) -> Result<(), DataSourceError> {
    let valid = !ticker.is_empty()
        && ticker.len() <= 16
        && ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(DataSourceError::InvalidTicker(ticker.to_string()))
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
