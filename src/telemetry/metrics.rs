//! Prometheus metrics

use std::time::Duration;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Contracts run through the classifier
    ContractsEvaluated,
    /// Contracts flagged as undervalued
    ContractsFlagged,
    /// Scans that ended in an error
    ScansFailed,
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::ContractsEvaluated => "options_scanner_contracts_evaluated_total",
            CounterMetric::ContractsFlagged => "options_scanner_contracts_flagged_total",
            CounterMetric::ScansFailed => "options_scanner_scans_failed_total",
        }
    }
}

/// Increment a counter
pub fn increment(metric: CounterMetric, value: u64) {
    metrics::counter!(metric.name()).increment(value);
}

/// Record the wall time of one scan
pub fn record_scan_duration(ticker: &str, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!("options_scanner_scan_duration_ms", "ticker" => ticker.to_string())
        .record(value_ms);
    tracing::debug!(
        metric = "options_scanner_scan_duration_ms",
        value_ms,
        "Recording latency"
    );
}

/// Install the Prometheus exporter on `0.0.0.0:port`.
///
/// Must run inside a tokio runtime.
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(port, "Prometheus exporter listening");
    Ok(())
}
