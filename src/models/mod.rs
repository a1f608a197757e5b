pub mod bs;
pub mod grid;

/// Common traits used by the pricing models
pub mod traits {
    use crate::error::Result;
    use crate::market_params::{MarketParameters, OptionPrices};

    /// A model that turns market parameters into call and put prices.
    ///
    /// The grid evaluator is generic over this trait so that its indexing
    /// contract can be exercised with any model, not only Black-Scholes.
    pub trait PricingModel {
        fn model_name(&self) -> &str;
        fn price(&self, params: &MarketParameters) -> Result<OptionPrices>;
    }
}

/// Utility functions shared by the grid and rendering code
pub mod utils {
    /// `n` evenly spaced points from `min` to `max`, both inclusive.
    ///
    /// The last point is set to `max` exactly rather than accumulated, so
    /// axis endpoints match the requested range bit-for-bit. `n == 1` yields
    /// `[min]`; `n == 0` yields an empty vector.
    pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
        match n {
            0 => Vec::new(),
            1 => vec![min],
            _ => {
                let last = n - 1;
                let step = (max - min) / last as f64;
                (0..n)
                    .map(|i| if i == last { max } else { min + step * i as f64 })
                    .collect()
            }
        }
    }

}
