//! Dashboard configuration
//!
//! Mirrors the inputs of the pricing dashboard: the five market parameters,
//! the heatmap sweep and the rendering options. Every field has a default so
//! a TOML file only needs to name what it changes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result as PricingResult;
use crate::market_params::MarketParameters;
use crate::models::grid::{AxisRange, GridSpec, DEFAULT_RESOLUTION};
use crate::render::HeatmapStyle;

/// The five market inputs, unvalidated until converted to [`MarketParameters`].
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct MarketConfig {
    #[serde(default = "default_spot_price")]
    pub spot_price: f64,
    #[serde(default = "default_strike_price")]
    pub strike_price: f64,
    #[serde(default = "default_time_to_maturity")]
    pub time_to_maturity: f64,
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot_price: default_spot_price(),
            strike_price: default_strike_price(),
            time_to_maturity: default_time_to_maturity(),
            volatility: default_volatility(),
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// Axis bounds and resolution of the heatmap sweep.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct HeatmapConfig {
    #[serde(default = "default_spot_min")]
    pub spot_min: f64,
    #[serde(default = "default_spot_max")]
    pub spot_max: f64,
    #[serde(default = "default_volatility_min")]
    pub volatility_min: f64,
    #[serde(default = "default_volatility_max")]
    pub volatility_max: f64,
    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            volatility_min: default_volatility_min(),
            volatility_max: default_volatility_max(),
            resolution: default_resolution(),
        }
    }
}

/// Main configuration struct
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub heatmap: HeatmapConfig,
    #[serde(default)]
    pub render: HeatmapStyle,
}

impl DashboardConfig {
    /// The dashboard's initial state: an at-the-money one-year option with
    /// the heatmap swept over spot 60–90 and volatility 0.18–0.30.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Spot axis centred on the strike (±20%) instead of the fixed 60–90 band.
    pub fn at_the_money() -> Self {
        let market = MarketConfig::default();
        let spot = AxisRange::around(market.strike_price, 0.2);
        Self {
            market,
            heatmap: HeatmapConfig {
                spot_min: spot.min,
                spot_max: spot.max,
                volatility_min: 0.10,
                volatility_max: 0.50,
                ..HeatmapConfig::default()
            },
            render: HeatmapStyle::default(),
        }
    }

    /// Dense 25×25 sweep. Annotations are switched off since the cells are
    /// too small to hold a label.
    pub fn fine() -> Self {
        Self {
            heatmap: HeatmapConfig {
                resolution: 25,
                ..HeatmapConfig::default()
            },
            render: HeatmapStyle {
                annotate: false,
                ..HeatmapStyle::default()
            },
            ..Self::default()
        }
    }

    /// 3×3 sweep for quick checks and tests.
    pub fn minimal() -> Self {
        Self {
            heatmap: HeatmapConfig {
                resolution: 3,
                ..HeatmapConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parses a TOML document; missing sections and fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse dashboard configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded dashboard configuration");
        Ok(config)
    }

    /// Validated market parameters for the headline call/put prices.
    pub fn market_parameters(&self) -> PricingResult<MarketParameters> {
        let m = &self.market;
        MarketParameters::new(
            m.spot_price,
            m.strike_price,
            m.time_to_maturity,
            m.volatility,
            m.risk_free_rate,
        )
    }

    /// Grid request sharing strike, maturity and rate with the market inputs.
    pub fn grid_spec(&self) -> GridSpec {
        let h = &self.heatmap;
        GridSpec::new(
            self.market.strike_price,
            self.market.time_to_maturity,
            self.market.risk_free_rate,
            AxisRange::new(h.spot_min, h.spot_max),
            AxisRange::new(h.volatility_min, h.volatility_max),
        )
        .with_resolution(h.resolution)
    }
}

fn default_spot_price() -> f64 {
    100.0
}

fn default_strike_price() -> f64 {
    100.0
}

fn default_time_to_maturity() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.20
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_spot_min() -> f64 {
    60.0
}

fn default_spot_max() -> f64 {
    90.0
}

fn default_volatility_min() -> f64 {
    0.18
}

fn default_volatility_max() -> f64 {
    0.30
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}
