//! Undervaluation classifier

use super::{ValuationContext, ValuationResult};
use crate::chain::OptionContract;
use crate::model::{
    time_to_expiration, BlackScholes, DomainError, OptionKind, PricingInputs, PricingModel,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Flags contracts whose midpoint is below the model price
pub struct ValuationClassifier<M: PricingModel> {
    model: M,
}

impl<M: PricingModel> ValuationClassifier<M> {
    /// Create a classifier around a pricing model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Evaluate one contract.
    ///
    /// Returns `Ok(None)` unless the market midpoint is strictly below the
    /// theoretical price. Fails when the derived inputs cannot be priced.
    pub fn classify(
        &self,
        contract: &OptionContract,
        context: &ValuationContext,
    ) -> Result<Option<ValuationResult>, DomainError> {
        let inputs = pricing_inputs(contract, context)?;
        inputs.validate()?;

        let mid = contract
            .mid_price()
            .ok_or(DomainError::NonFinite {
                field: "market_price",
            })?;
        let market_price = to_f64("market_price", mid)?;
        let theoretical_price = self.model.price(contract.kind, &inputs);
        let symbol = option_symbol(
            &contract.underlying,
            contract.expiration,
            contract.kind,
            contract.strike,
        );

        tracing::debug!(
            option = %symbol,
            market = market_price,
            theoretical = theoretical_price,
            t = inputs.time,
            sigma = inputs.volatility,
            "Evaluated option"
        );

        if market_price >= theoretical_price || theoretical_price.is_nan() {
            return Ok(None);
        }

        Ok(Some(ValuationResult {
            record_id: Utc::now(),
            underlying: contract.underlying.clone(),
            option_symbol: symbol,
            kind: contract.kind,
            inputs,
            market_price,
            theoretical_price,
            undervaluation: theoretical_price - market_price,
        }))
    }
}

impl Default for ValuationClassifier<BlackScholes> {
    fn default() -> Self {
        Self::new(BlackScholes::new())
    }
}

/// Classify one contract with the Black-Scholes model
pub fn classify(
    contract: &OptionContract,
    context: &ValuationContext,
) -> Result<Option<ValuationResult>, DomainError> {
    ValuationClassifier::<BlackScholes>::default().classify(contract, context)
}

/// Human-readable contract symbol, e.g. `AAPL20231117C170.00`.
///
/// Identification only; not an exchange (OCC) symbol.
pub fn option_symbol(
    underlying: &str,
    expiration: NaiveDate,
    kind: OptionKind,
    strike: Decimal,
) -> String {
    format!(
        "{}{}{}{}",
        underlying,
        expiration.format("%Y%m%d"),
        kind.letter(),
        strike
    )
}

fn pricing_inputs(
    contract: &OptionContract,
    context: &ValuationContext,
) -> Result<PricingInputs, DomainError> {
    // A zero quote means the source had no estimate
    let volatility = match contract.implied_volatility {
        Some(vol) if !vol.is_zero() => to_f64("volatility", vol)?,
        _ => context.default_volatility,
    };

    Ok(PricingInputs {
        spot: context.spot,
        strike: to_f64("strike", contract.strike)?,
        volatility,
        rate: context.rate,
        time: time_to_expiration(contract.expiration, context.reference_date),
    })
}

fn to_f64(field: &'static str, value: Decimal) -> Result<f64, DomainError> {
    value.to_f64().ok_or(DomainError::NonFinite { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{price_call, price_put, MIN_TIME_TO_EXPIRY};
    use rust_decimal_macros::dec;

    /// Model returning a fixed price
    struct FixedPrice(f64);

    impl PricingModel for FixedPrice {
        fn price(&self, _kind: OptionKind, _inputs: &PricingInputs) -> f64 {
            self.0
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn context() -> ValuationContext {
        ValuationContext {
            spot: 175.84,
            rate: 0.05,
            default_volatility: 0.3,
            reference_date: ymd(2023, 10, 18),
        }
    }

    fn contract(kind: OptionKind, bid: Decimal, ask: Decimal) -> OptionContract {
        OptionContract {
            underlying: "AAPL".to_string(),
            strike: dec!(170.00),
            expiration: ymd(2023, 11, 18),
            kind,
            bid,
            ask,
            implied_volatility: Some(dec!(0.25)),
        }
    }

    #[test]
    fn test_market_above_theoretical_not_flagged() {
        let classifier = ValuationClassifier::new(FixedPrice(1.5));
        let result = classifier
            .classify(&contract(OptionKind::Call, dec!(1.0), dec!(3.0)), &context())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_equal_prices_not_flagged() {
        let classifier = ValuationClassifier::new(FixedPrice(2.0));
        let result = classifier
            .classify(&contract(OptionKind::Put, dec!(1.0), dec!(3.0)), &context())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_market_below_theoretical_flagged() {
        let classifier = ValuationClassifier::new(FixedPrice(2.5));
        let result = classifier
            .classify(&contract(OptionKind::Call, dec!(1.0), dec!(3.0)), &context())
            .unwrap()
            .unwrap();

        assert_eq!(result.underlying, "AAPL");
        assert_eq!(result.option_symbol, "AAPL20231118C170.00");
        assert_eq!(result.kind, OptionKind::Call);
        assert_eq!(result.market_price, 2.0);
        assert_eq!(result.theoretical_price, 2.5);
        assert_eq!(result.undervaluation, 0.5);
        assert!(result.undervaluation > 0.0);
    }

    #[test]
    fn test_flagged_result_echoes_inputs() {
        let classifier = ValuationClassifier::new(FixedPrice(100.0));
        let result = classifier
            .classify(&contract(OptionKind::Call, dec!(1.0), dec!(3.0)), &context())
            .unwrap()
            .unwrap();

        assert_eq!(result.inputs.spot, 175.84);
        assert_eq!(result.inputs.strike, 170.0);
        assert_eq!(result.inputs.volatility, 0.25);
        assert_eq!(result.inputs.rate, 0.05);
        assert_eq!(result.inputs.time, 31.0 / 365.0);
    }

    #[test]
    fn test_default_volatility_when_missing_or_zero() {
        let classifier = ValuationClassifier::new(FixedPrice(100.0));

        let mut missing = contract(OptionKind::Call, dec!(1.0), dec!(3.0));
        missing.implied_volatility = None;
        let result = classifier.classify(&missing, &context()).unwrap().unwrap();
        assert_eq!(result.inputs.volatility, 0.3);

        let mut zero = contract(OptionKind::Call, dec!(1.0), dec!(3.0));
        zero.implied_volatility = Some(dec!(0));
        let result = classifier.classify(&zero, &context()).unwrap().unwrap();
        assert_eq!(result.inputs.volatility, 0.3);
    }

    #[test]
    fn test_expired_contract_uses_floor() {
        let classifier = ValuationClassifier::new(FixedPrice(100.0));
        let mut expired = contract(OptionKind::Put, dec!(1.0), dec!(3.0));
        expired.expiration = ymd(2023, 10, 18);
        let result = classifier.classify(&expired, &context()).unwrap().unwrap();
        assert_eq!(result.inputs.time, MIN_TIME_TO_EXPIRY);
    }

    #[test]
    fn test_invalid_inputs_are_domain_errors() {
        let classifier = ValuationClassifier::<BlackScholes>::default();

        let mut negative_vol = contract(OptionKind::Call, dec!(1.0), dec!(3.0));
        negative_vol.implied_volatility = Some(dec!(-0.2));
        assert!(matches!(
            classifier.classify(&negative_vol, &context()),
            Err(DomainError::NonPositive {
                field: "volatility",
                ..
            })
        ));

        let mut zero_strike = contract(OptionKind::Call, dec!(1.0), dec!(3.0));
        zero_strike.strike = dec!(0);
        assert!(matches!(
            classifier.classify(&zero_strike, &context()),
            Err(DomainError::NonPositive { field: "strike", .. })
        ));

        let bad_spot = ValuationContext {
            spot: 0.0,
            ..context()
        };
        assert!(classifier
            .classify(&contract(OptionKind::Call, dec!(1.0), dec!(3.0)), &bad_spot)
            .is_err());
    }

    #[test]
    fn test_overflowing_quotes_are_domain_errors() {
        let huge = contract(OptionKind::Call, Decimal::MAX, Decimal::MAX);
        assert_eq!(
            classify(&huge, &context()),
            Err(DomainError::NonFinite {
                field: "market_price"
            })
        );
    }

    #[test]
    fn test_black_scholes_classification() {
        // Theoretical call ~8.96 with 31 days, sigma 0.25
        let cheap = contract(OptionKind::Call, dec!(8.00), dec!(8.40));
        let result = classify(&cheap, &context()).unwrap().unwrap();
        let expected = price_call(175.84, 170.0, 0.25, 0.05, 31.0 / 365.0);
        assert!((result.theoretical_price - expected).abs() < 1e-12);
        assert!((result.undervaluation - (expected - 8.2)).abs() < 1e-9);

        let rich = contract(OptionKind::Call, dec!(12.00), dec!(12.40));
        assert!(classify(&rich, &context()).unwrap().is_none());
    }

    #[test]
    fn test_put_uses_put_formula() {
        let put = contract(OptionKind::Put, dec!(0.01), dec!(0.03));
        let result = classify(&put, &context()).unwrap().unwrap();
        let expected = price_put(175.84, 170.0, 0.25, 0.05, 31.0 / 365.0);
        assert!((result.theoretical_price - expected).abs() < 1e-12);
        assert_eq!(result.option_symbol, "AAPL20231118P170.00");
    }

    #[test]
    fn test_option_symbol() {
        assert_eq!(
            option_symbol("AAPL", ymd(2023, 11, 17), OptionKind::Call, dec!(170.00)),
            "AAPL20231117C170.00"
        );
        assert_eq!(
            option_symbol("SPY", ymd(2024, 1, 5), OptionKind::Put, dec!(452.5)),
            "SPY20240105P452.5"
        );
    }
}
