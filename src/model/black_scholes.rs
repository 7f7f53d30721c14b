//! Black-Scholes European option pricing
//!
//! d1 = (ln(S/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))
//! d2 = d1 - sigma*sqrt(T)
//! call = S*N(d1) - K*exp(-rT)*N(d2)
//! put  = K*exp(-rT)*N(-d2) - S*N(-d1)

use super::{OptionKind, PricingInputs, PricingModel};
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Black-Scholes pricing model
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl BlackScholes {
    /// Create a new Black-Scholes model
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholes {
    fn price(&self, kind: OptionKind, inputs: &PricingInputs) -> f64 {
        let PricingInputs {
            spot,
            strike,
            volatility,
            rate,
            time,
        } = *inputs;

        match kind {
            OptionKind::Call => price_call(spot, strike, volatility, rate, time),
            OptionKind::Put => price_put(spot, strike, volatility, rate, time),
        }
    }
}

/// European call value.
///
/// Requires `s`, `k`, `sigma` and `t` strictly positive.
pub fn price_call(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, sigma, r, t);
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// European put value.
///
/// Requires `s`, `k`, `sigma` and `t` strictly positive.
pub fn price_put(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> f64 {
    let (d1, d2) = d1_d2(s, k, sigma, r, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * norm_cdf(-d1)
}

fn d1_d2(s: f64, k: f64, sigma: f64, r: f64, t: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Standard normal CDF, accurate in both tails
fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}
