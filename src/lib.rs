//! # bs-heatmap: Black-Scholes Option Pricing and Sensitivity Heatmaps
//!
//! `bs-heatmap` prices European calls and puts with the Black-Scholes closed
//! form and sweeps those prices over a grid of spot prices and volatilities
//! for visual inspection.
//!
//! ## Core Features
//!
//! - **Pricing**: call and put values from spot, strike, maturity, volatility
//!   and risk-free rate, with inputs validated before evaluation
//! - **Sensitivity grid**: full `resolution × resolution` recompute over
//!   evenly spaced spot and volatility axes
//! - **Rendering**: annotated two-panel SVG heatmap, text summary, CSV export
//! - **Configuration**: TOML dashboard settings with presets (`serde` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_heatmap::{price, price_grid, AxisRange, GridSpec, MarketParameters};
//!
//! let params = MarketParameters::new(100.0, 100.0, 1.0, 0.20, 0.05)?;
//! let prices = price(&params)?;
//! assert!((prices.call - 10.4506).abs() < 1e-3);
//!
//! let spec = GridSpec::new(100.0, 1.0, 0.05, AxisRange::new(60.0, 90.0), AxisRange::new(0.18, 0.30));
//! let grid = price_grid(&spec)?;
//! assert_eq!(grid.shape(), (10, 10));
//! # Ok::<(), bs_heatmap::PricingError>(())
//! ```
//!
//! ## Errors
//!
//! A spot, strike, maturity or volatility that is not strictly positive, or
//! any non-finite input, yields [`PricingError::InvalidParameter`] naming the
//! parameter. The formula is never evaluated outside its domain, so no NaN or
//! infinity reaches the caller.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod market_params;
pub mod models;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{Axis, Parameter, PricingError, Result};
pub use market_params::{MarketParameters, OptionPrices};

pub use models::bs::{black_scholes, norm_cdf, BlackScholes};
pub use models::grid::{
    price_grid_with, validate_grid_spec, AxisRange, GridSpec, HeatmapGrid, DEFAULT_RESOLUTION,
};
pub use models::traits::PricingModel;

#[cfg(feature = "serde")]
pub use config::{DashboardConfig, HeatmapConfig, MarketConfig};
pub use render::HeatmapStyle;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured dashboard settings.
///
/// - [`standard()`]: the dashboard's initial inputs and sweep
/// - [`at_the_money()`]: spot axis centred on the strike
/// - [`fine()`]: 25×25 sweep without annotations
/// - [`minimal()`]: 3×3 sweep
#[cfg(feature = "serde")]
pub mod default_configs {
    use crate::config::DashboardConfig;

    /// S=100, K=100, T=1, σ=0.20, r=0.05; spot 60–90, volatility 0.18–0.30, 10×10.
    ///
    /// ```rust
    /// use bs_heatmap::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.heatmap.resolution, 10);
    /// ```
    pub fn standard() -> DashboardConfig {
        DashboardConfig::standard()
    }

    pub fn at_the_money() -> DashboardConfig {
        DashboardConfig::at_the_money()
    }

    pub fn fine() -> DashboardConfig {
        DashboardConfig::fine()
    }

    pub fn minimal() -> DashboardConfig {
        DashboardConfig::minimal()
    }
}

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European call and put under Black-Scholes.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 − σ·√T
/// call = S·Φ(d1) − K·e^(−rT)·Φ(d2)
/// put  = K·e^(−rT)·Φ(−d2) − S·Φ(−d1)
/// ```
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] if `params` violates the model's domain
/// (possible when it was built with a struct literal instead of
/// [`MarketParameters::new`]).
pub fn price(params: &MarketParameters) -> Result<OptionPrices> {
    BlackScholes.price(params)
}

/// Price from the five scalars directly.
///
/// ```rust
/// use bs_heatmap::{price_option, Parameter};
///
/// let prices = price_option(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
/// assert!(prices.call > prices.put);
///
/// let err = price_option(100.0, 100.0, 0.0, 0.2, 0.05).unwrap_err();
/// assert_eq!(err.parameter(), Some(Parameter::TimeToMaturity));
/// ```
pub fn price_option(
    spot_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    volatility: f64,
    risk_free_rate: f64,
) -> Result<OptionPrices> {
    let params = MarketParameters::new(
        spot_price,
        strike_price,
        time_to_maturity,
        volatility,
        risk_free_rate,
    )?;
    Ok(black_scholes(&params))
}

/// Price every `(volatility, spot)` cell of the grid described by `spec`.
///
/// `call_matrix[i][j]` is the call price at `volatility_axis[i]` and
/// `spot_axis[j]`, computed exactly as [`price`] would compute it.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] for a zero resolution or any bound,
/// strike or maturity outside the model's domain;
/// [`PricingError::InvalidRange`] when a range has `min > max`. Validation
/// happens before the first cell is priced.
pub fn price_grid(spec: &GridSpec) -> Result<HeatmapGrid> {
    models::grid::price_grid(spec)
}
