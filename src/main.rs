use clap::Parser;
use options_scanner::cli::{Cli, Commands};
use options_scanner::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    options_scanner::telemetry::init_telemetry(&config.telemetry)?;

    let result = match cli.command {
        Commands::Scan(args) => {
            tracing::info!("Starting scan");
            args.execute(&config).await
        }
        Commands::Price(args) => args.execute(&config),
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Scan: {} spot={} r={} sigma_default={} date={}",
                config.scan.ticker,
                config.scan.spot,
                config.scan.rate,
                config.scan.default_volatility,
                config.scan.reference_date
            );
            println!(
                "  Data source: {}/{}/{}/{} (limit {}, timeout {}s)",
                config.data_source.base_url,
                config.data_source.owner,
                config.data_source.database,
                config.data_source.branch,
                config.data_source.row_limit,
                config.data_source.timeout_secs
            );
            println!("  Storage: {}", config.storage.path.display());
            println!(
                "  Telemetry: level={} format={:?} metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
            Ok(())
        }
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}
