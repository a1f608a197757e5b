// Example: plot_heatmap.rs
// Prices the call/put grid for a dashboard configuration and writes the
// two-panel heatmap as SVG, plus the raw grid as CSV.
//
// Usage:
//     cargo run --example plot_heatmap -- [config.toml]
//
// Without an argument the standard configuration is used. Output files are
// heatmap.svg and heatmap.csv in the working directory.

use std::env;

use anyhow::Result;
use bs_heatmap::render::{price_panels, summary_table, write_grid_csv_file, write_heatmap_svg};
use bs_heatmap::{price, price_grid, DashboardConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match env::args().nth(1) {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::standard(),
    };

    let params = config.market_parameters()?;
    let prices = price(&params)?;
    println!("{}", summary_table(&params));
    println!("{}", price_panels(&prices));

    let grid = price_grid(&config.grid_spec())?;
    let (lo, hi) = grid.value_bounds().unwrap_or((0.0, 0.0));
    println!(
        "Grid {:?}, prices between {:.2} and {:.2}",
        grid.shape(),
        lo,
        hi
    );

    write_heatmap_svg("heatmap.svg", &grid, &config.render)?;
    write_grid_csv_file("heatmap.csv", &grid)?;
    println!("Heatmap saved to heatmap.svg, grid saved to heatmap.csv");
    Ok(())
}
