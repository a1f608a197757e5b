use bs_heatmap::{default_configs, price, price_grid, DashboardConfig};

fn describe(name: &str, config: &DashboardConfig, use_case: &str) {
    let h = &config.heatmap;
    println!("{name}:");
    println!(
        "   Spot range: {:.2} - {:.2}",
        h.spot_min, h.spot_max
    );
    println!(
        "   Volatility range: {:.2} - {:.2}",
        h.volatility_min, h.volatility_max
    );
    println!("   Resolution: {}x{}", h.resolution, h.resolution);
    println!("   Annotated: {}", config.render.annotate);
    println!("   Use case: {use_case}\n");
}

fn main() {
    println!("bs-heatmap Default Configuration Examples\n");

    describe(
        "1. Standard Configuration",
        &default_configs::standard(),
        "The dashboard's initial view",
    );
    describe(
        "2. At-the-money Configuration",
        &default_configs::at_the_money(),
        "Spot axis centred on the strike",
    );
    describe(
        "3. Fine Configuration",
        &default_configs::fine(),
        "Dense sweeps, smooth-looking heatmaps",
    );
    describe(
        "4. Minimal Configuration",
        &default_configs::minimal(),
        "Quick checks, debugging",
    );

    println!("Pricing with the standard configuration...");
    let config = default_configs::standard();
    let result = config
        .market_parameters()
        .and_then(|params| price(&params))
        .and_then(|prices| price_grid(&config.grid_spec()).map(|grid| (prices, grid)));

    match result {
        Ok((prices, grid)) => {
            println!("✅ Call {:.4}, put {:.4}", prices.call, prices.put);
            println!("   Grid shape: {:?}", grid.shape());
        }
        Err(e) => println!("❌ Pricing failed: {}", e),
    }
}
