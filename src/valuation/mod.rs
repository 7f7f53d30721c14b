//! Valuation module
//!
//! Compares each contract's market midpoint against its theoretical value
//! and flags the ones trading below it

mod classifier;
mod types;

pub use classifier::{classify, option_symbol, ValuationClassifier};
pub use types::{ValuationContext, ValuationResult};
