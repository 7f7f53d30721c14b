//! Configuration types for options-scanner

use crate::chain::{DoltHubConfig, DOLTHUB_API_URL};
use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub data_source: DataSourceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Default scan parameters
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Underlying ticker
    #[serde(default = "default_ticker")]
    pub ticker: String,

    /// Spot price of the underlying on the reference date
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Risk-free rate
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Volatility for contracts without a quoted estimate
    #[serde(default = "default_volatility")]
    pub default_volatility: f64,

    /// Chain observation date (YYYY-MM-DD)
    #[serde(default = "default_reference_date")]
    pub reference_date: String,
}

fn default_ticker() -> String {
    "AAPL".to_string()
}
fn default_spot() -> f64 {
    175.84 // AAPL close on 2023-10-18
}
fn default_rate() -> f64 {
    0.05
}
fn default_volatility() -> f64 {
    0.3
}
fn default_reference_date() -> String {
    "2023-10-18".to_string()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ticker: default_ticker(),
            spot: default_spot(),
            rate: default_rate(),
            default_volatility: default_volatility(),
            reference_date: default_reference_date(),
        }
    }
}

/// DoltHub data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Maximum rows fetched per scan
    #[serde(default = "default_row_limit")]
    pub row_limit: u32,
    /// HTTP request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DOLTHUB_API_URL.to_string()
}
fn default_owner() -> String {
    "post-no-preference".to_string()
}
fn default_database() -> String {
    "options".to_string()
}
fn default_branch() -> String {
    "master".to_string()
}
fn default_row_limit() -> u32 {
    100
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            owner: default_owner(),
            database: default_database(),
            branch: default_branch(),
            row_limit: default_row_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DataSourceConfig {
    /// Client settings for [`crate::chain::DoltHubClient`]
    pub fn to_client_config(&self) -> DoltHubConfig {
        DoltHubConfig {
            base_url: self.base_url.clone(),
            owner: self.owner.clone(),
            database: self.database.clone(),
            branch: self.branch.clone(),
            row_limit: self.row_limit,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Result storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// JSON Lines file receiving flagged results
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/undervalued_options.jsonl")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus exporter port; disabled when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
