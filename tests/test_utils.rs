#![allow(dead_code)] // Not every test binary uses every helper

use bs_heatmap::{AxisRange, GridSpec, MarketParameters};

/// Market parameters for tests that are known to be valid.
pub fn params(spot: f64, strike: f64, t: f64, vol: f64, r: f64) -> MarketParameters {
    MarketParameters::new(spot, strike, t, vol, r).expect("test parameters must be valid")
}

/// The dashboard's default contract: S=100, K=100, T=1, σ=0.20, r=0.05.
pub fn reference_params() -> MarketParameters {
    params(100.0, 100.0, 1.0, 0.20, 0.05)
}

/// The dashboard's default heatmap sweep at the given resolution.
pub fn reference_spec(resolution: usize) -> GridSpec {
    GridSpec::new(
        100.0,
        1.0,
        0.05,
        AxisRange::new(60.0, 90.0),
        AxisRange::new(0.18, 0.30),
    )
    .with_resolution(resolution)
}

/// Put-call parity gap `(call - put) - (S - K·e^(-rT))` relative to the
/// larger of spot and strike.
pub fn parity_gap(p: &MarketParameters, call: f64, put: f64) -> f64 {
    let forward_value = p.spot_price - p.strike_price * p.discount_factor();
    ((call - put) - forward_value).abs() / p.spot_price.max(p.strike_price)
}
