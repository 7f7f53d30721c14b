//! options-scanner: flags options trading below their Black-Scholes value
//!
//! This library provides the core components for:
//! - Black-Scholes pricing of European calls and puts
//! - Time-to-expiration normalization
//! - Undervaluation classification of quoted contracts
//! - Option chain retrieval from the DoltHub SQL API
//! - Result persistence to JSON Lines
//! - Scan orchestration with logging and metrics

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;
pub mod storage;
pub mod telemetry;
pub mod valuation;

pub use error::ScanError;
