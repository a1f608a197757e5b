// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. Inputs arrive as validated
// `MarketParameters`, so the formula never sees a non-positive log argument,
// a zero denominator or an infinite discount factor.

use crate::error::Result;
use crate::market_params::{MarketParameters, OptionPrices};
use crate::models::traits::PricingModel;

/// Standard normal cumulative distribution function.
///
/// Evaluated through the complementary error function, which keeps full
/// relative precision deep in the lower tail where `1 + erf(x)` would cancel.
pub fn norm_cdf(x: f64) -> f64 {
    // Φ(x) = 0.5 * erfc(-x / sqrt(2))
    0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
}

/// The `d1` and `d2` terms of the Black-Scholes formula.
#[allow(non_snake_case)]
pub fn d1_d2(params: &MarketParameters) -> (f64, f64) {
    let S = params.spot_price;
    let K = params.strike_price;
    let T = params.time_to_maturity;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    let sigma_sqrt_t = params.total_volatility();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Call and put prices under Black-Scholes assumptions.
///
/// Negative rounding residue far out of the money is clamped to zero; put-call
/// parity is unaffected beyond the last ulp. NaN is passed through, so callers
/// skipping validation see it instead of a plausible zero.
#[allow(non_snake_case)]
pub fn black_scholes(params: &MarketParameters) -> OptionPrices {
    let S = params.spot_price;
    let K = params.strike_price;
    let (d1, d2) = d1_d2(params);
    let discounted_strike = K * params.discount_factor();

    let call = S * norm_cdf(d1) - discounted_strike * norm_cdf(d2);
    let put = discounted_strike * norm_cdf(-d2) - S * norm_cdf(-d1);

    OptionPrices {
        call: clamp_residue(call),
        put: clamp_residue(put),
    }
}

fn clamp_residue(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Intrinsic value `(max(S-K, 0), max(K-S, 0))`, the T → 0 limit of the prices.
pub fn intrinsic_value(spot: f64, strike: f64) -> OptionPrices {
    OptionPrices {
        call: (spot - strike).max(0.0),
        put: (strike - spot).max(0.0),
    }
}

/// The Black-Scholes model as a [`PricingModel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn price(&self, params: &MarketParameters) -> Result<OptionPrices> {
        params.validate()?;
        Ok(black_scholes(params))
    }
}
