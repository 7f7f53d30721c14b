//! Option pricing model module
//!
//! Computes theoretical European option values with Black-Scholes and
//! normalizes calendar dates into year fractions for the model.

mod black_scholes;
mod expiry;

pub use black_scholes::{price_call, price_put, BlackScholes};
pub use expiry::{
    parse_date, time_to_expiration, time_to_expiration_str, DateFormatError, DAYS_PER_YEAR,
    MIN_TIME_TO_EXPIRY,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Option right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// Single-letter code used in option symbols
    pub fn letter(self) -> char {
        match self {
            OptionKind::Call => 'C',
            OptionKind::Put => 'P',
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => f.write_str("Call"),
            OptionKind::Put => f.write_str("Put"),
        }
    }
}

/// Inputs to the pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    /// Underlying spot price
    #[serde(rename = "S")]
    pub spot: f64,
    /// Strike price
    #[serde(rename = "K")]
    pub strike: f64,
    /// Annualized volatility
    #[serde(rename = "sigma")]
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    #[serde(rename = "r")]
    pub rate: f64,
    /// Time to expiration in years
    #[serde(rename = "t")]
    pub time: f64,
}

impl PricingInputs {
    /// Check that the inputs keep the pricing formula well defined.
    ///
    /// Spot, strike, volatility and time must be finite and strictly
    /// positive. The rate only has to be finite.
    pub fn validate(&self) -> Result<(), DomainError> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("volatility", self.volatility),
            ("time", self.time),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(DomainError::NonFinite { field });
            }
            if value <= 0.0 {
                return Err(DomainError::NonPositive { field, value });
            }
        }
        if !self.rate.is_finite() {
            return Err(DomainError::NonFinite { field: "rate" });
        }
        Ok(())
    }
}

/// Invalid pricing inputs
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// Input must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// Input is NaN or infinite
    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },
}

/// Trait for option pricing model implementations
pub trait PricingModel: Send + Sync {
    /// Theoretical value of a European option.
    ///
    /// Callers validate `inputs` first; implementations do not clamp.
    fn price(&self, kind: OptionKind, inputs: &PricingInputs) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PricingInputs {
        PricingInputs {
            spot: 100.0,
            strike: 95.0,
            volatility: 0.3,
            rate: 0.05,
            time: 0.5,
        }
    }

    #[test]
    fn test_validate_accepts_positive_inputs() {
        assert!(inputs().validate().is_ok());
    }

    #[test]
    fn test_validate_allows_negative_rate() {
        let params = PricingInputs {
            rate: -0.01,
            ..inputs()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_volatility() {
        let params = PricingInputs {
            volatility: 0.0,
            ..inputs()
        };
        assert_eq!(
            params.validate(),
            Err(DomainError::NonPositive {
                field: "volatility",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_spot() {
        let params = PricingInputs {
            spot: -1.0,
            ..inputs()
        };
        assert!(matches!(
            params.validate(),
            Err(DomainError::NonPositive { field: "spot", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let params = PricingInputs {
            strike: f64::NAN,
            ..inputs()
        };
        assert_eq!(
            params.validate(),
            Err(DomainError::NonFinite { field: "strike" })
        );
    }

    #[test]
    fn test_option_kind_letter() {
        assert_eq!(OptionKind::Call.letter(), 'C');
        assert_eq!(OptionKind::Put.letter(), 'P');
        assert_eq!(OptionKind::Put.to_string(), "Put");
    }

    #[test]
    fn test_pricing_inputs_serialize_field_names() {
        let json = serde_json::to_value(inputs()).unwrap();
        assert_eq!(json["S"], 100.0);
        assert_eq!(json["K"], 95.0);
        assert_eq!(json["sigma"], 0.3);
        assert_eq!(json["r"], 0.05);
        assert_eq!(json["t"], 0.5);
    }
}
