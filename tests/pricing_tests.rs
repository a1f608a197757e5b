mod test_utils;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use bs_heatmap::{norm_cdf, price, price_option, MarketParameters, Parameter, PricingError};
use proptest::prelude::*;
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{params, parity_gap, reference_params};

/// S=100, K=100, T=1, σ=0.20, r=0.05 against the textbook values.
#[test]
fn test_reference_scenario() {
    let prices = price(&reference_params()).expect("pricing failed");

    assert_abs_diff_eq!(prices.call, 10.4506, epsilon = 1e-3);
    assert_abs_diff_eq!(prices.put, 5.5735, epsilon = 1e-3);
}

/// The scalar entry point and the struct entry point agree exactly.
#[test]
fn test_price_option_matches_price() {
    let via_struct = price(&reference_params()).unwrap();
    let via_scalars = price_option(100.0, 100.0, 1.0, 0.20, 0.05).unwrap();
    assert_eq!(via_struct, via_scalars);
}

/// With S = K and r = 0 the forward equals the strike, so call and put match.
#[test]
fn test_atm_zero_rate_symmetry() {
    for &(s, t, vol) in &[(100.0, 1.0, 0.2), (50.0, 0.25, 0.6), (2500.0, 3.0, 0.1)] {
        let prices = price(&params(s, s, t, vol, 0.0)).unwrap();
        assert_abs_diff_eq!(prices.call, prices.put, epsilon = 1e-10 * s);
    }
}

/// As T → 0⁺ prices collapse onto intrinsic value.
#[test]
fn test_short_maturity_limit() {
    let t = 1e-8;
    let itm_call = price(&params(110.0, 100.0, t, 0.2, 0.05)).unwrap();
    assert_abs_diff_eq!(itm_call.call, 10.0, epsilon = 1e-4);
    assert_abs_diff_eq!(itm_call.put, 0.0, epsilon = 1e-10);

    let itm_put = price(&params(90.0, 100.0, t, 0.2, 0.05)).unwrap();
    assert_abs_diff_eq!(itm_put.call, 0.0, epsilon = 1e-10);
    assert_abs_diff_eq!(itm_put.put, 10.0, epsilon = 1e-4);
}

/// Prices are never negative, even far out of the money.
#[test]
fn test_prices_non_negative_in_the_wings() {
    for &(s, k) in &[(10.0, 1000.0), (1000.0, 10.0)] {
        let prices = price(&params(s, k, 0.1, 0.05, 0.1)).unwrap();
        assert!(prices.call >= 0.0 && prices.put >= 0.0, "{prices:?}");
        assert!(prices.call.is_finite() && prices.put.is_finite());
    }
}

/// Φ against values computed to 20 significant digits.
#[test]
fn test_norm_cdf_reference_values() {
    let table = [
        (-5.0, 2.866_515_718_791_939_1e-7),
        (-3.0, 1.349_898_031_630_094_5e-3),
        (-2.0, 2.275_013_194_817_920_7e-2),
        (-1.0, 0.158_655_253_931_457_05),
        (0.5, 0.691_462_461_274_013_1),
        (1.96, 0.975_002_104_851_779_5),
    ];
    for (x, expected) in table {
        assert_relative_eq!(norm_cdf(x), expected, max_relative = 1e-12);
    }
}

/// Φ agrees with an independent implementation across the range. statrs is
/// itself only accurate to about 1e-11 here, so the check is relative.
#[test]
fn test_norm_cdf_against_statrs() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    for i in -60..=60 {
        let x = i as f64 * 0.1;
        assert_relative_eq!(norm_cdf(x), normal.cdf(x), max_relative = 1e-9);
    }
}

/// Zero maturity and zero volatility are rejected rather than priced as NaN.
#[test]
fn test_degenerate_inputs_rejected() {
    let cases = [
        ((100.0, 100.0, 0.0, 0.2, 0.05), Parameter::TimeToMaturity),
        ((100.0, 100.0, 1.0, 0.0, 0.05), Parameter::Volatility),
        ((0.0, 100.0, 1.0, 0.2, 0.05), Parameter::SpotPrice),
        ((100.0, -5.0, 1.0, 0.2, 0.05), Parameter::StrikePrice),
        ((100.0, 100.0, -1.0, 0.2, 0.05), Parameter::TimeToMaturity),
        ((100.0, 100.0, 1.0, 0.2, f64::NAN), Parameter::RiskFreeRate),
    ];

    for ((s, k, t, vol, r), expected) in cases {
        let err = price_option(s, k, t, vol, r).unwrap_err();
        assert!(
            matches!(err, PricingError::InvalidParameter { parameter, .. } if parameter == expected),
            "expected {expected} to be rejected, got {err}"
        );
    }
}

/// Inputs valid one by one but degenerate together are rejected instead of
/// pricing to 0 or infinity.
#[test]
fn test_jointly_degenerate_inputs_rejected() {
    let underflow = price_option(100.0, 100.0, 1e-250, 1e-200, 0.0).unwrap_err();
    assert_eq!(underflow.parameter(), Some(Parameter::Volatility));

    let overflow = price_option(100.0, 100.0, 10.0, 0.2, -1e308).unwrap_err();
    assert_eq!(overflow.parameter(), Some(Parameter::RiskFreeRate));

    // Large but representable inputs still price to finite values
    let prices = price_option(100.0, 100.0, 10.0, 0.2, -50.0).unwrap();
    assert!(prices.call.is_finite() && prices.put.is_finite());
}

/// A struct literal bypassing the constructor is still checked by `price`.
#[test]
fn test_unvalidated_literal_rejected() {
    let bad = MarketParameters {
        time_to_maturity: 0.0,
        ..reference_params()
    };
    let err = price(&bad).unwrap_err();
    assert_eq!(err.parameter(), Some(Parameter::TimeToMaturity));
    assert!(err.to_string().contains("time_to_maturity"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// call − put = S − K·e^(−rT) for every valid input.
    #[test]
    fn prop_put_call_parity(
        s in 1.0..500.0f64,
        k in 1.0..500.0f64,
        t in 0.01..5.0f64,
        vol in 0.01..2.0f64,
        r in -0.05..0.2f64,
    ) {
        let p = params(s, k, t, vol, r);
        let prices = price(&p).unwrap();
        prop_assert!(parity_gap(&p, prices.call, prices.put) < 1e-9);
    }

    /// Raising volatility raises both option values.
    #[test]
    fn prop_vega_positive(
        s in 90.0..110.0f64,
        k in 90.0..110.0f64,
        t in 0.5..2.0f64,
        vol in 0.15..0.6f64,
        r in 0.0..0.05f64,
    ) {
        let low = price(&params(s, k, t, vol, r)).unwrap();
        let high = price(&params(s, k, t, vol + 0.05, r)).unwrap();
        prop_assert!(high.call > low.call);
        prop_assert!(high.put > low.put);
    }
}
