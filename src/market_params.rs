//! Market inputs and pricing outputs.
//!
//! [`MarketParameters`] carries the five scalars of the Black-Scholes model.
//! Values are validated on construction so that downstream code can evaluate
//! logarithms and square roots without re-checking the domain.

use crate::error::{
    ensure_finite, ensure_positive, Parameter, PricingError, Result, DISCOUNT_FACTOR_OVERFLOWS,
    TOTAL_VOLATILITY_OUT_OF_RANGE,
};

/// Inputs to a single Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Current price of the underlying (S)
    pub spot_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualised volatility as a decimal, e.g. 0.20 for 20% (σ)
    pub volatility: f64,
    /// Continuously compounded risk-free rate as a decimal (r)
    pub risk_free_rate: f64,
}

impl MarketParameters {
    /// Creates market parameters after checking the model's domain.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidParameter`](crate::PricingError::InvalidParameter)
    /// if spot, strike, maturity or volatility is not strictly positive, if
    /// any value is NaN or infinite, or if σ·√T or e^(−rT) leaves the range of
    /// `f64`.
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Result<Self> {
        let params = Self {
            spot_price,
            strike_price,
            time_to_maturity,
            volatility,
            risk_free_rate,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks the domain, e.g. for values built with a struct literal.
    pub fn validate(&self) -> Result<()> {
        ensure_positive(Parameter::SpotPrice, self.spot_price)?;
        ensure_positive(Parameter::StrikePrice, self.strike_price)?;
        ensure_positive(Parameter::TimeToMaturity, self.time_to_maturity)?;
        ensure_positive(Parameter::Volatility, self.volatility)?;
        ensure_finite(Parameter::RiskFreeRate, self.risk_free_rate)?;

        // Individually valid inputs can still underflow or overflow together
        let total_vol = self.total_volatility();
        if !(total_vol > 0.0 && (total_vol * total_vol).is_finite()) {
            return Err(PricingError::invalid(
                Parameter::Volatility,
                self.volatility,
                TOTAL_VOLATILITY_OUT_OF_RANGE,
            ));
        }
        if !self.discount_factor().is_finite() {
            return Err(PricingError::invalid(
                Parameter::RiskFreeRate,
                self.risk_free_rate,
                DISCOUNT_FACTOR_OVERFLOWS,
            ));
        }
        Ok(())
    }

    /// Copy with a different spot price.
    pub fn with_spot(self, spot_price: f64) -> Result<Self> {
        Self::new(
            spot_price,
            self.strike_price,
            self.time_to_maturity,
            self.volatility,
            self.risk_free_rate,
        )
    }

    /// Copy with a different volatility.
    pub fn with_volatility(self, volatility: f64) -> Result<Self> {
        Self::new(
            self.spot_price,
            self.strike_price,
            self.time_to_maturity,
            volatility,
            self.risk_free_rate,
        )
    }

    /// Volatility scaled to the option's life, σ·√T.
    pub fn total_volatility(&self) -> f64 {
        self.volatility * self.time_to_maturity.sqrt()
    }

    /// Discount factor e^(−rT).
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

/// Theoretical call and put values for one set of market parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrices {
    pub call: f64,
    pub put: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_negative_rate() {
        let params = MarketParameters::new(100.0, 100.0, 1.0, 0.2, -0.01).unwrap();
        assert!(params.discount_factor() > 1.0);
    }

    #[test]
    fn reports_first_failing_parameter() {
        let err = MarketParameters::new(-1.0, 0.0, 1.0, 0.2, 0.05).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::SpotPrice));
    }

    #[test]
    fn rejects_infinite_rate() {
        let err = MarketParameters::new(100.0, 100.0, 1.0, 0.2, f64::INFINITY).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                parameter: Parameter::RiskFreeRate,
                ..
            }
        ));
    }

    #[test]
    fn rejects_underflowing_total_volatility() {
        let err = MarketParameters::new(100.0, 100.0, 1e-250, 1e-200, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                parameter: Parameter::Volatility,
                reason: TOTAL_VOLATILITY_OUT_OF_RANGE,
                ..
            }
        ));
        assert!(MarketParameters::new(100.0, 100.0, 1.0, 1e200, 0.0).is_err());
    }

    #[test]
    fn rejects_overflowing_discount_factor() {
        let err = MarketParameters::new(100.0, 100.0, 10.0, 0.2, -1e308).unwrap_err();
        assert_eq!(err.parameter(), Some(Parameter::RiskFreeRate));
        assert!(err.to_string().contains("overflows"));
    }

    #[test]
    fn with_volatility_revalidates() {
        let params = MarketParameters::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
        assert!(params.with_volatility(0.0).is_err());
        assert_eq!(params.with_spot(90.0).unwrap().spot_price, 90.0);
    }
}
