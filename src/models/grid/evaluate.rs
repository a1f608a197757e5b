use tracing::debug;

use super::types::{AxisRange, GridSpec, HeatmapGrid};
use crate::error::{
    ensure_finite, ensure_positive, Axis, Parameter, PricingError, Result, MUST_BE_AT_LEAST_ONE,
};
use crate::market_params::MarketParameters;
use crate::models::bs::BlackScholes;
use crate::models::traits::PricingModel;
use crate::models::utils::linspace;

/// Checks everything a grid evaluation depends on before the first cell is
/// priced, so an invalid request fails as a whole rather than half-way.
pub fn validate_grid_spec(spec: &GridSpec) -> Result<()> {
    ensure_positive(Parameter::StrikePrice, spec.strike_price)?;
    ensure_positive(Parameter::TimeToMaturity, spec.time_to_maturity)?;
    ensure_finite(Parameter::RiskFreeRate, spec.risk_free_rate)?;

    if spec.resolution == 0 {
        return Err(PricingError::invalid(
            Parameter::Resolution,
            0.0,
            MUST_BE_AT_LEAST_ONE,
        ));
    }

    validate_range(
        Axis::Spot,
        spec.spot_range,
        Parameter::SpotMin,
        Parameter::SpotMax,
    )?;
    validate_range(
        Axis::Volatility,
        spec.volatility_range,
        Parameter::VolatilityMin,
        Parameter::VolatilityMax,
    )?;
    Ok(())
}

fn validate_range(axis: Axis, range: AxisRange, min: Parameter, max: Parameter) -> Result<()> {
    // Every point of the axis feeds a log or a square root, so the lower
    // bound must already be in the model's domain.
    ensure_positive(min, range.min)?;
    ensure_positive(max, range.max)?;
    if range.min > range.max {
        return Err(PricingError::InvalidRange {
            axis,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

/// Prices every `(volatility, spot)` cell of the grid with `model`.
///
/// Rows follow the volatility axis and columns the spot axis. Each cell is an
/// independent evaluation; nothing is interpolated or reused between cells.
pub fn price_grid_with<M: PricingModel>(model: &M, spec: &GridSpec) -> Result<HeatmapGrid> {
    validate_grid_spec(spec)?;

    let spot_axis = linspace(spec.spot_range.min, spec.spot_range.max, spec.resolution);
    let volatility_axis = linspace(
        spec.volatility_range.min,
        spec.volatility_range.max,
        spec.resolution,
    );

    debug!(
        model = model.model_name(),
        resolution = spec.resolution,
        spot_min = spec.spot_range.min,
        spot_max = spec.spot_range.max,
        vol_min = spec.volatility_range.min,
        vol_max = spec.volatility_range.max,
        "pricing heatmap grid"
    );

    let mut call_matrix = Vec::with_capacity(volatility_axis.len());
    let mut put_matrix = Vec::with_capacity(volatility_axis.len());

    for &volatility in &volatility_axis {
        let mut call_row = Vec::with_capacity(spot_axis.len());
        let mut put_row = Vec::with_capacity(spot_axis.len());

        for &spot_price in &spot_axis {
            let params = MarketParameters::new(
                spot_price,
                spec.strike_price,
                spec.time_to_maturity,
                volatility,
                spec.risk_free_rate,
            )?;
            let prices = model.price(&params)?;
            call_row.push(prices.call);
            put_row.push(prices.put);
        }

        call_matrix.push(call_row);
        put_matrix.push(put_row);
    }

    debug!(
        cells = spec.resolution * spec.resolution,
        "heatmap grid complete"
    );

    Ok(HeatmapGrid {
        spot_axis,
        volatility_axis,
        call_matrix,
        put_matrix,
    })
}

/// Black-Scholes grid evaluation.
pub fn price_grid(spec: &GridSpec) -> Result<HeatmapGrid> {
    price_grid_with(&BlackScholes, spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_params::OptionPrices;

    /// Echoes its inputs so the matrix orientation can be read back.
    struct EchoModel;

    impl PricingModel for EchoModel {
        fn model_name(&self) -> &str {
            "echo"
        }

        fn price(&self, params: &MarketParameters) -> Result<OptionPrices> {
            Ok(OptionPrices {
                call: params.spot_price,
                put: params.volatility,
            })
        }
    }

    fn spec() -> GridSpec {
        GridSpec::new(
            100.0,
            1.0,
            0.05,
            AxisRange::new(60.0, 90.0),
            AxisRange::new(0.18, 0.30),
        )
    }

    #[test]
    fn rows_follow_volatility_and_columns_follow_spot() {
        let grid = price_grid_with(&EchoModel, &spec().with_resolution(4)).unwrap();
        for (i, row) in grid.call_matrix.iter().enumerate() {
            for (j, &call) in row.iter().enumerate() {
                assert_eq!(call, grid.spot_axis[j]);
                assert_eq!(grid.put_matrix[i][j], grid.volatility_axis[i]);
            }
        }
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = price_grid(&spec().with_resolution(0)).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::Resolution));
    }

    #[test]
    fn zero_spot_min_fails_before_pricing() {
        let mut s = spec();
        s.spot_range.min = 0.0;
        let err = price_grid(&s).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::SpotMin));
    }

    #[test]
    fn inverted_volatility_range_is_rejected() {
        let mut s = spec();
        s.volatility_range = AxisRange::new(0.30, 0.18);
        assert_eq!(
            price_grid(&s).unwrap_err(),
            PricingError::InvalidRange {
                axis: Axis::Volatility,
                min: 0.30,
                max: 0.18
            }
        );
    }

    #[test]
    fn single_point_grid() {
        let grid = price_grid(&spec().with_resolution(1)).unwrap();
        assert_eq!(grid.shape(), (1, 1));
        assert_eq!(grid.spot_axis, vec![60.0]);
        assert_eq!(grid.volatility_axis, vec![0.18]);
    }
}
