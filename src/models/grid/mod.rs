//! Spot/volatility sensitivity grid
//!
//! Sweeps spot price and volatility over evenly spaced axes while holding
//! strike, maturity and rate fixed, and prices every cell of the cartesian
//! product. The result feeds the call and put heatmaps.

pub mod evaluate;
pub mod types;

pub use evaluate::*;
pub use types::*;
