//! Scan orchestrator
//!
//! Runs one scan end to end:
//! 1. Fetch the option chain for a ticker and date
//! 2. Classify every contract against the pricing model
//! 3. Persist and return the undervalued ones

use crate::chain::ChainSource;
use crate::error::ScanError;
use crate::model::{BlackScholes, PricingModel};
use crate::storage::ResultStore;
use crate::telemetry::{self, CounterMetric};
use crate::valuation::{ValuationClassifier, ValuationContext, ValuationResult};
use chrono::NaiveDate;
use std::time::Instant;

/// Parameters for one scan
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    /// Underlying ticker
    pub ticker: String,
    /// Underlying spot price, supplied by the caller
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility for contracts without a quoted estimate
    pub default_volatility: f64,
    /// Chain observation date
    pub reference_date: NaiveDate,
}

impl ScanRequest {
    fn context(&self) -> ValuationContext {
        ValuationContext {
            spot: self.spot,
            rate: self.rate,
            default_volatility: self.default_volatility,
            reference_date: self.reference_date,
        }
    }
}

/// Drives chain retrieval, classification and persistence
pub struct Scanner<C: ChainSource, R: ResultStore, M: PricingModel = BlackScholes> {
    source: C,
    store: R,
    classifier: ValuationClassifier<M>,
}

impl<C: ChainSource, R: ResultStore> Scanner<C, R, BlackScholes> {
    /// Create a scanner using the Black-Scholes model
    pub fn new(source: C, store: R) -> Self {
        Self::with_model(source, store, BlackScholes::new())
    }
}

impl<C: ChainSource, R: ResultStore, M: PricingModel> Scanner<C, R, M> {
    /// Create a scanner with a custom pricing model
    pub fn with_model(source: C, store: R, model: M) -> Self {
        Self {
            source,
            store,
            classifier: ValuationClassifier::new(model),
        }
    }

    /// Result store
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Run one scan.
    ///
    /// Contracts are evaluated in chain order and each flagged result is
    /// persisted before the next contract is looked at, so results stored
    /// before a failure stay stored. Any error aborts the scan.
    pub async fn scan(&self, request: &ScanRequest) -> Result<Vec<ValuationResult>, ScanError> {
        let started = Instant::now();
        let result = self.run(request).await;
        telemetry::record_scan_duration(&request.ticker, started.elapsed());

        if let Err(ref e) = result {
            telemetry::increment(CounterMetric::ScansFailed, 1);
            tracing::error!(
                ticker = %request.ticker,
                date = %request.reference_date,
                error = %e,
                "Scan failed"
            );
        }
        result
    }

    async fn run(&self, request: &ScanRequest) -> Result<Vec<ValuationResult>, ScanError> {
        let chain = self
            .source
            .fetch_chain(&request.ticker, request.reference_date)
            .await?;

        tracing::info!(
            ticker = %request.ticker,
            date = %request.reference_date,
            contracts = chain.len(),
            "Fetched option chain"
        );

        if chain.is_empty() {
            tracing::warn!(ticker = %request.ticker, "No options data available");
            return Ok(Vec::new());
        }

        tracing::info!(
            spot = request.spot,
            date = %request.reference_date,
            "Using supplied spot price"
        );

        let context = request.context();
        let mut flagged = Vec::new();

        for contract in &chain {
            telemetry::increment(CounterMetric::ContractsEvaluated, 1);

            let Some(result) = self.classifier.classify(contract, &context)? else {
                continue;
            };

            self.store.insert(&result).await?;
            telemetry::increment(CounterMetric::ContractsFlagged, 1);
            tracing::info!(
                option = %result.option_symbol,
                undervaluation = result.undervaluation,
                "Undervalued option found"
            );
            flagged.push(result);
        }

        tracing::info!(
            ticker = %request.ticker,
            evaluated = chain.len(),
            flagged = flagged.len(),
            "Scan complete"
        );

        Ok(flagged)
    }
}
