//! bs_heatmap - Black-Scholes prices and spot/volatility heatmaps from the command line
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (`--config`), then individual flags.
//!
//! ```text
//! bs_heatmap --spot 105 --volatility 0.25 --spot-min 80 --spot-max 120 --svg out.svg --csv out.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use bs_heatmap::render::{price_panels, summary_table, write_grid_csv_file, write_heatmap_svg};
use bs_heatmap::{price, price_grid, DashboardConfig};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Black-Scholes option pricing with call/put heatmaps
#[derive(Parser, Debug)]
#[command(name = "bs_heatmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Current asset price
    #[arg(long)]
    spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    strike: Option<f64>,

    /// Time to maturity in years
    #[arg(long)]
    maturity: Option<f64>,

    /// Volatility (σ) as a decimal
    #[arg(long)]
    volatility: Option<f64>,

    /// Risk-free interest rate as a decimal
    #[arg(long)]
    rate: Option<f64>,

    /// Lowest spot price on the heatmap
    #[arg(long)]
    spot_min: Option<f64>,

    /// Highest spot price on the heatmap
    #[arg(long)]
    spot_max: Option<f64>,

    /// Lowest volatility on the heatmap
    #[arg(long)]
    vol_min: Option<f64>,

    /// Highest volatility on the heatmap
    #[arg(long)]
    vol_max: Option<f64>,

    /// Points per heatmap axis
    #[arg(long)]
    resolution: Option<usize>,

    /// Output SVG path
    #[arg(long, default_value = "heatmap.svg")]
    svg: PathBuf,

    /// Also export the grid as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Leave heatmap cells unlabelled
    #[arg(long)]
    no_annotate: bool,
}

impl Cli {
    /// Overlays explicit flags on `config`.
    fn apply(&self, config: &mut DashboardConfig) {
        let market = &mut config.market;
        override_with(&mut market.spot_price, self.spot);
        override_with(&mut market.strike_price, self.strike);
        override_with(&mut market.time_to_maturity, self.maturity);
        override_with(&mut market.volatility, self.volatility);
        override_with(&mut market.risk_free_rate, self.rate);

        let heatmap = &mut config.heatmap;
        override_with(&mut heatmap.spot_min, self.spot_min);
        override_with(&mut heatmap.spot_max, self.spot_max);
        override_with(&mut heatmap.volatility_min, self.vol_min);
        override_with(&mut heatmap.volatility_max, self.vol_max);
        override_with(&mut heatmap.resolution, self.resolution);

        if self.no_annotate {
            config.render.annotate = false;
        }
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::standard(),
    };
    cli.apply(&mut config);
    debug!(?config, "effective configuration");

    let params = config
        .market_parameters()
        .context("invalid market parameters")?;
    let prices = price(&params)?;

    println!("{}", summary_table(&params));
    println!();
    println!("{}", price_panels(&prices));

    let grid = price_grid(&config.grid_spec()).context("invalid heatmap parameters")?;
    let (rows, cols) = grid.shape();
    info!(rows, cols, "heatmap grid priced");

    write_heatmap_svg(&cli.svg, &grid, &config.render)?;
    if let Some(csv_path) = &cli.csv {
        write_grid_csv_file(csv_path, &grid)?;
    }

    Ok(())
}
