//! CLI interface for options-scanner
//!
//! Provides subcommands for:
//! - `scan`: Flag undervalued contracts in an option chain
//! - `price`: Price a single contract
//! - `config`: Show the effective configuration

mod price;
mod scan;

pub use price::PriceArgs;
pub use scan::ScanArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "options-scanner")]
#[command(about = "Flags options trading below their Black-Scholes value")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan an option chain for undervalued contracts
    Scan(ScanArgs),
    /// Price a single European option
    Price(PriceArgs),
    /// Show configuration
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_overrides() {
        let cli = Cli::try_parse_from([
            "options-scanner",
            "--config",
            "custom.toml",
            "scan",
            "--ticker",
            "MSFT",
            "--spot",
            "330.5",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.config, "custom.toml");
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.ticker.as_deref(), Some("MSFT"));
                assert_eq!(args.spot, Some(330.5));
                assert!(args.rate.is_none());
                assert!(args.dry_run);
            }
            other => panic!("expected scan, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_price() {
        let cli = Cli::try_parse_from([
            "options-scanner",
            "price",
            "--kind",
            "put",
            "--spot",
            "100",
            "--strike",
            "95",
            "--vol",
            "0.2",
            "--time",
            "0.5",
        ])
        .unwrap();
        assert_eq!(cli.config, "config.toml");
        assert!(matches!(cli.command, Commands::Price(_)));
    }

    #[test]
    fn test_price_time_conflicts_with_expiration() {
        let result = Cli::try_parse_from([
            "options-scanner",
            "price",
            "--kind",
            "call",
            "--spot",
            "100",
            "--strike",
            "95",
            "--vol",
            "0.2",
            "--time",
            "0.5",
            "--expiration",
            "2023-11-17",
        ]);
        assert!(result.is_err());
    }
}
