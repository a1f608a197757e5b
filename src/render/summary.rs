use crate::market_params::{MarketParameters, OptionPrices};

const HEADERS: [&str; 5] = [
    "Current Asset Price",
    "Strike Price",
    "Time to Maturity (Years)",
    "Volatility (σ)",
    "Risk-Free Interest Rate",
];

/// Text table of the five market inputs, one header row and one value row,
/// values right-aligned to two decimals.
///
/// ```rust
/// # use bs_heatmap::{render::summary_table, MarketParameters};
/// let params = MarketParameters::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap();
/// let table = summary_table(&params);
/// assert!(table.contains("Strike Price"));
/// assert!(table.lines().nth(1).unwrap().contains("0.20"));
/// ```
pub fn summary_table(params: &MarketParameters) -> String {
    let values = [
        params.spot_price,
        params.strike_price,
        params.time_to_maturity,
        params.volatility,
        params.risk_free_rate,
    ];

    let mut header = String::from("|");
    let mut row = String::from("|");
    for (name, value) in HEADERS.iter().zip(values) {
        let width = name.chars().count();
        header.push_str(&format!(" {name} |"));
        row.push_str(&format!(" {value:>width$.2} |"));
    }
    format!("{header}\n{row}")
}

/// The headline call and put values as currency.
pub fn price_panels(prices: &OptionPrices) -> String {
    format!(
        "CALL Value: ${:.2}\nPUT Value: ${:.2}",
        prices.call, prices.put
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_have_equal_width() {
        let params = MarketParameters::new(1234.5, 100.0, 0.25, 0.35, -0.01).unwrap();
        let table = summary_table(&params);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 2);
        assert_eq!(widths[0], widths[1]);
        assert!(table.contains("1234.50"));
        assert!(table.contains("-0.01"));
    }

    #[test]
    fn panels_round_to_cents() {
        let text = price_panels(&OptionPrices {
            call: 10.450_583,
            put: 5.573_526,
        });
        assert_eq!(text, "CALL Value: $10.45\nPUT Value: $5.57");
    }
}
