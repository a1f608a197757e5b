// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing and a small sensitivity grid
//!
//! This example shows how to:
//! 1. Price a single call/put pair
//! 2. Check put-call parity on the result
//! 3. Sweep spot and volatility and print the call grid as a table
//! 4. Handle an invalid input

use anyhow::Result;
use bs_heatmap::render::{price_panels, summary_table};
use bs_heatmap::{price, price_grid, price_option, AxisRange, GridSpec, MarketParameters};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    println!("\nStep 1: Pricing an at-the-money option...");
    let params = MarketParameters::new(100.0, 100.0, 1.0, 0.20, 0.05)?;
    let prices = price(&params)?;
    println!("{}", summary_table(&params));
    println!("{}", price_panels(&prices));

    println!("\nStep 2: Put-call parity check...");
    let lhs = prices.call - prices.put;
    let rhs = params.spot_price - params.strike_price * params.discount_factor();
    println!("  call - put        = {:.10}", lhs);
    println!("  S - K*exp(-rT)    = {:.10}", rhs);
    println!("  difference        = {:.2e}", (lhs - rhs).abs());

    println!("\nStep 3: Sweeping spot and volatility...");
    let spec = GridSpec::new(
        params.strike_price,
        params.time_to_maturity,
        params.risk_free_rate,
        AxisRange::around(params.strike_price, 0.2),
        AxisRange::new(0.10, 0.40),
    )
    .with_resolution(5);
    let grid = price_grid(&spec)?;

    print!("{:>8}", "vol\\spot");
    for spot in &grid.spot_axis {
        print!("{:>9.2}", spot);
    }
    println!();
    for (vol, row) in grid.volatility_axis.iter().zip(&grid.call_matrix) {
        print!("{:>8.2}", vol);
        for call in row {
            print!("{:>9.2}", call);
        }
        println!();
    }

    println!("\nStep 4: Invalid input...");
    match price_option(100.0, 100.0, 0.0, 0.20, 0.05) {
        Ok(p) => println!("  unexpected prices: {:?}", p),
        Err(e) => println!("  rejected: {}", e),
    }

    Ok(())
}
