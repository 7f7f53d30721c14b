//! Scan command implementation

use crate::chain::DoltHubClient;
use crate::config::Config;
use crate::model::parse_date;
use crate::scanner::{ScanRequest, Scanner};
use crate::storage::{JsonlStore, MemoryStore, ResultStore};
use crate::valuation::ValuationResult;
use clap::Args;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Underlying ticker
    #[arg(short, long)]
    pub ticker: Option<String>,

    /// Underlying spot price on the reference date
    #[arg(long)]
    pub spot: Option<f64>,

    /// Risk-free rate
    #[arg(short, long)]
    pub rate: Option<f64>,

    /// Volatility for contracts without a quoted estimate
    #[arg(long)]
    pub sigma_default: Option<f64>,

    /// Reference date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Keep results in memory instead of writing them to storage
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    /// Merge command-line overrides over the configured defaults
    pub fn request(&self, config: &Config) -> anyhow::Result<ScanRequest> {
        let date = self
            .date
            .as_deref()
            .unwrap_or(config.scan.reference_date.as_str());

        Ok(ScanRequest {
            ticker: self
                .ticker
                .clone()
                .unwrap_or_else(|| config.scan.ticker.clone()),
            spot: self.spot.unwrap_or(config.scan.spot),
            rate: self.rate.unwrap_or(config.scan.rate),
            default_volatility: self
                .sigma_default
                .unwrap_or(config.scan.default_volatility),
            reference_date: parse_date(date)?,
        })
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let request = self.request(config)?;
        let source = DoltHubClient::with_config(config.data_source.to_client_config())?;

        let results = if self.dry_run {
            run(Scanner::new(source, MemoryStore::new()), &request).await?
        } else {
            tracing::info!(path = %config.storage.path.display(), "Persisting results");
            let store = JsonlStore::new(config.storage.path.clone());
            run(Scanner::new(source, store), &request).await?
        };

        println!("Found {} undervalued options:", results.len());
        println!("{}", serde_json::to_string_pretty(&results)?);
        Ok(())
    }
}

async fn run<R: ResultStore>(
    scanner: Scanner<DoltHubClient, R>,
    request: &ScanRequest,
) -> anyhow::Result<Vec<ValuationResult>> {
    Ok(scanner.scan(request).await?)
}
