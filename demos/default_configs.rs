use bs_sensitivity_lib::{compute_dashboard, default_configs, OptionParameters, SamplerConfig};

fn describe(name: &str, config: &SamplerConfig) {
    println!("{}:", name);
    println!(
        "   Price curve: ±{:.0}% of spot (floor {}), {} intervals",
        config.price_curve.range_fraction * 100.0,
        config.price_curve.floor,
        config.price_curve.steps
    );
    println!(
        "   Greeks curve: ±{:.0}% of spot, {} intervals",
        config.greeks_curve.range_fraction * 100.0,
        config.greeks_curve.steps
    );
    println!(
        "   Surface: {}×{} nodes, spot {:.2}S..{:.2}S, time {}..max(T, {})",
        config.surface.spot_steps,
        config.surface.time_steps,
        config.surface.spot_low,
        config.surface.spot_high,
        config.surface.time_floor,
        config.surface.min_time_horizon
    );
    println!(
        "   Colors: {} -> {}\n",
        config.colors.low.to_hex(),
        config.colors.high.to_hex()
    );
}

fn main() {
    println!("bs-sensitivity-lib Default Configuration Examples\n");

    describe("1. Dashboard Configuration", &default_configs::dashboard());
    describe("2. Fine Configuration (reports)", &default_configs::fine());
    describe("3. Coarse Configuration (previews)", &default_configs::coarse());

    // Overrides from TOML; omitted sections keep the dashboard values
    let toml = r##"
        [surface]
        spot_steps = 40
        time_steps = 30

        [colors]
        low = { r = 0, g = 0, b = 0 }
        high = { r = 255, g = 255, b = 255 }
    "##;
    match SamplerConfig::from_toml_str(toml) {
        Ok(config) => describe("4. Custom Configuration (TOML)", &config),
        Err(e) => println!("❌ Invalid configuration: {:#}", e),
    }

    println!("Running the dashboard sweeps with the coarse config...");
    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    match compute_dashboard(&params, &default_configs::coarse()) {
        Ok(series) => {
            println!("✅ Sweeps completed");
            println!("   Price curve points: {}", series.price_curve.points.len());
            println!("   Surface nodes: {}", series.surface.points.len());
            println!("   Greeks curve points: {}", series.greeks_curve.points.len());
        }
        Err(e) => {
            println!("❌ Sweeps failed: {:#}", e);
        }
    }
}
