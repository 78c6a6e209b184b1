// Example: export_series.rs
// Writes every dashboard series to CSV so it can be charted elsewhere.
//
// Usage:
//     cargo run --example export_series -- <out_dir> [spot strike years rate vol]
//
// Produces price_curve.csv, price_surface.csv and greeks_curve.csv in <out_dir>.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bs_sensitivity_lib::{compute_dashboard, default_configs, GreekSeries, OptionParameters};
use csv::Writer;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn parse_params(args: &[String]) -> Result<OptionParameters> {
    if args.is_empty() {
        return Ok(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2));
    }
    if args.len() != 5 {
        bail!("Expected 5 inputs (spot strike years rate vol), got {}", args.len());
    }
    let values = args
        .iter()
        .map(|a| a.parse::<f64>().with_context(|| format!("Not a number: {}", a)))
        .collect::<Result<Vec<f64>>>()?;
    Ok(OptionParameters::new(
        values[0], values[1], values[2], values[3], values[4],
    ))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let out_dir = match args.first() {
        Some(dir) => PathBuf::from(dir),
        None => bail!("Usage: export_series <out_dir> [spot strike years rate vol]"),
    };
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let params = parse_params(&args[1..])?;
    let series = compute_dashboard(&params, &default_configs::dashboard())?;

    write_rows(&out_dir.join("price_curve.csv"), &series.price_curve.points)?;
    write_rows(&out_dir.join("price_surface.csv"), &series.surface.points)?;

    // Greeks: one column per named series
    let path = out_dir.join("greeks_curve.csv");
    let mut wtr = Writer::from_path(&path)?;
    let mut header = vec!["spot"];
    header.extend(GreekSeries::ALL.iter().map(|s| s.name()));
    wtr.write_record(&header)?;
    for point in &series.greeks_curve.points {
        let mut record = vec![point.spot.to_string()];
        record.extend(
            GreekSeries::ALL
                .iter()
                .map(|s| s.extract(&point.greeks).to_string()),
        );
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = series.greeks_curve.points.len(), "wrote Greeks");

    println!("Series written to {}", out_dir.display());
    Ok(())
}

fn write_rows<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut wtr = Writer::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote series");
    Ok(())
}
