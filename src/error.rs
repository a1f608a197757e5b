//! Error types for option pricing and grid evaluation.
//!
//! The pricing core never returns NaN for a domain violation. Every input is
//! checked before the closed form is evaluated and a failing check surfaces as
//! a [`PricingError`] naming the offending parameter.

use std::fmt;
use thiserror::Error;

/// Scalar inputs accepted by the pricing and grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    SpotPrice,
    StrikePrice,
    TimeToMaturity,
    Volatility,
    RiskFreeRate,
    SpotMin,
    SpotMax,
    VolatilityMin,
    VolatilityMax,
    Resolution,
}

impl Parameter {
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::SpotPrice => "spot_price",
            Parameter::StrikePrice => "strike_price",
            Parameter::TimeToMaturity => "time_to_maturity",
            Parameter::Volatility => "volatility",
            Parameter::RiskFreeRate => "risk_free_rate",
            Parameter::SpotMin => "spot_min",
            Parameter::SpotMax => "spot_max",
            Parameter::VolatilityMin => "volatility_min",
            Parameter::VolatilityMax => "volatility_max",
            Parameter::Resolution => "resolution",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Heatmap axis identifier used in range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Spot,
    Volatility,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Spot => f.write_str("spot"),
            Axis::Volatility => f.write_str("volatility"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter {parameter}={value}: {reason}")]
    InvalidParameter {
        parameter: Parameter,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid {axis} range: min {min} exceeds max {max}")]
    InvalidRange { axis: Axis, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, PricingError>;

pub(crate) const MUST_BE_POSITIVE: &str = "must be > 0";
pub(crate) const MUST_BE_FINITE: &str = "must be finite";
pub(crate) const MUST_BE_AT_LEAST_ONE: &str = "must be at least 1";
pub(crate) const TOTAL_VOLATILITY_OUT_OF_RANGE: &str =
    "volatility * sqrt(time_to_maturity) must be representable and > 0";
pub(crate) const DISCOUNT_FACTOR_OVERFLOWS: &str =
    "exp(-risk_free_rate * time_to_maturity) overflows";

impl PricingError {
    pub fn invalid(parameter: Parameter, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    /// The parameter at fault, if the error concerns a single scalar.
    pub fn parameter(&self) -> Option<Parameter> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(*parameter),
            Self::InvalidRange { .. } => None,
        }
    }
}

/// Rejects non-finite and non-positive values.
pub(crate) fn ensure_positive(parameter: Parameter, value: f64) -> Result<()> {
    ensure_finite(parameter, value)?;
    if value <= 0.0 {
        return Err(PricingError::invalid(parameter, value, MUST_BE_POSITIVE));
    }
    Ok(())
}

pub(crate) fn ensure_finite(parameter: Parameter, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(parameter, value, MUST_BE_FINITE));
    }
    Ok(())
}
