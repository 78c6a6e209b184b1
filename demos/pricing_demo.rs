// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing, Greeks and the spot sweep
//!
//! This example shows how to:
//! 1. Price a call and a put from one parameter set
//! 2. Read the Greeks for both sides
//! 3. Check put-call parity
//! 4. Print a coarse price-vs-spot table

use anyhow::Result;
use bs_sensitivity_lib::{
    default_configs, greeks, price, price_curve, OptionParameters, OptionType,
};

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
    println!(
        "Spot ${:.2}, strike ${:.2}, {:.2}y, rate {:.2}%, vol {:.1}%",
        params.spot,
        params.strike,
        params.time_to_maturity,
        params.risk_free_rate * 100.0,
        params.volatility * 100.0
    );

    println!("\nStep 1: Prices");
    let call = price(&params, OptionType::Call);
    let put = price(&params, OptionType::Put);
    println!("  Call: ${:.4}", call);
    println!("  Put:  ${:.4}", put);

    println!("\nStep 2: Greeks");
    let g = greeks(&params);
    for option_type in [OptionType::Call, OptionType::Put] {
        let og = g.for_type(option_type);
        println!(
            "  {:<8} delta={:+.4} gamma={:.4} theta={:+.4} ({:+.4}/day) vega={:.4} rho={:+.4}",
            option_type.to_string(),
            og.delta,
            og.gamma,
            og.theta,
            g.theta_per_day(option_type),
            og.vega,
            og.rho
        );
    }

    println!("\nStep 3: Put-call parity");
    let forward_value =
        params.spot - params.strike * (-params.risk_free_rate * params.time_to_maturity).exp();
    println!("  C - P         = {:.8}", call - put);
    println!("  S - K·e^(-rT) = {:.8}", forward_value);

    println!("\nStep 4: Price vs spot");
    let curve = price_curve(&params, &default_configs::coarse().price_curve)?;
    println!("  {:>10} {:>10} {:>10}", "spot", "call", "put");
    for point in &curve.points {
        let marker = if point.is_current { " <- current" } else { "" };
        println!(
            "  {:>10.2} {:>10.4} {:>10.4}{}",
            point.spot, point.call, point.put, marker
        );
    }

    Ok(())
}
