// Example: plot_price_surface.rs
// Renders the two dashboard charts for a single parameter set: call/put price
// against spot, and the call price heat-map over spot × time to maturity.
//
// Usage:
//     cargo run --example plot_price_surface -- [config.toml]
//
// The optional TOML file follows `SamplerConfig` (all sections optional).
// Output is written to price_curve.svg and price_surface.svg in the working
// directory. Set RUST_LOG=debug to see the sweep diagnostics.

use std::env;
use std::error::Error;

use bs_sensitivity_lib::{
    compute_dashboard, default_configs, OptionParameters, PriceCurve, PriceSurface, Rgb,
    SamplerConfig,
};
use plotters::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match env::args().nth(1) {
        Some(path) => SamplerConfig::from_toml_file(&path)?,
        None => default_configs::dashboard(),
    };

    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let series = compute_dashboard(&params, &config)?;

    println!(
        "S={} K={} T={}y r={:.2}% σ={:.1}%",
        params.spot,
        params.strike,
        params.time_to_maturity,
        params.risk_free_rate * 100.0,
        params.volatility * 100.0
    );
    println!("Call: ${:.4}  Put: ${:.4}", series.call_price, series.put_price);

    plot_price_curve(&series.price_curve, "price_curve.svg")?;
    println!("Chart saved to price_curve.svg");

    plot_surface(
        &series.surface,
        &series.surface_colors,
        &params,
        &config,
        "price_surface.svg",
    )?;
    println!("Chart saved to price_surface.svg");

    Ok(())
}

fn plot_price_curve(curve: &PriceCurve, path: &str) -> Result<(), Box<dyn Error>> {
    let x_min = curve.points.first().map(|p| p.spot).unwrap_or(0.0);
    let x_max = curve.points.last().map(|p| p.spot).unwrap_or(1.0);
    let y_max = curve
        .points
        .iter()
        .map(|p| p.call.max(p.put))
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
        * 1.05;

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Option Price vs Spot", ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Spot ($)")
        .y_desc("Price ($)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.spot, p.call)),
            BLUE.stroke_width(2),
        ))?
        .label("Call Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            curve.points.iter().map(|p| (p.spot, p.put)),
            RED.stroke_width(2),
        ))?
        .label("Put Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    // Reference line at the current spot
    if let Some(current) = curve.current() {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(current.spot, 0.0), (current.spot, y_max)],
            BLACK.stroke_width(1),
        )))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_surface(
    surface: &PriceSurface,
    colors: &[Rgb],
    params: &OptionParameters,
    config: &SamplerConfig,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let sc = &config.surface;
    let spot_lo = params.spot * sc.spot_low;
    let spot_hi = params.spot * sc.spot_high;
    let time_hi = params.time_to_maturity.max(sc.min_time_horizon);
    let spot_step = (spot_hi - spot_lo) / surface.spot_steps as f64;
    let time_step = (time_hi - sc.time_floor) / surface.time_steps as f64;

    let root = SVGBackend::new(path, (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Price Surface (Decay View)", ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(sc.time_floor..time_hi, spot_lo..spot_hi)?;

    chart
        .configure_mesh()
        .x_desc("Time to Maturity (y)")
        .y_desc("Spot Price ($)")
        .disable_mesh()
        .draw()?;

    chart.draw_series(surface.points.iter().zip(colors).map(|(p, c)| {
        Rectangle::new(
            [(p.time, p.spot), (p.time + time_step, p.spot + spot_step)],
            RGBColor(c.r, c.g, c.b).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}
