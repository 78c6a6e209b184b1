// Closed-form Black-Scholes pricing and first-order Greeks for European options
// on a non-dividend-paying underlying.  Nothing here validates its inputs or
// returns an error: ill-posed inputs surface as NaN / infinity and expiry is
// handled by falling back to intrinsic value.

pub mod types;

pub use types::*;

use crate::models::normal::{cdf, pdf};

/// Standardized moment `d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)`.
///
/// Returns `0` when `σ == 0` or `T == 0`. This only keeps the formulas free of a
/// division by zero; it is not the limiting value of `d1`.
pub fn d1(params: &OptionParameters) -> f64 {
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_maturity: t,
        risk_free_rate: r,
        volatility: sigma,
    } = *params;

    if sigma == 0.0 || t == 0.0 {
        return 0.0;
    }
    ((s / k).ln() + (r + sigma * sigma / 2.0) * t) / (sigma * t.sqrt())
}

/// `d2 = d1 - σ·√T`.
pub fn d2(d1: f64, time_to_maturity: f64, volatility: f64) -> f64 {
    d1 - volatility * time_to_maturity.sqrt()
}

/// Payoff if exercised now: `max(0, S - K)` for a call, `max(0, K - S)` for a put.
pub fn intrinsic_value(params: &OptionParameters, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => (params.spot - params.strike).max(0.0),
        OptionType::Put => (params.strike - params.spot).max(0.0),
    }
}

/// Theoretical price of a European option.
///
/// For `T <= 0` the intrinsic value is returned without touching `d1`/`d2`.
/// The output sign is not clamped.
pub fn price(params: &OptionParameters, option_type: OptionType) -> f64 {
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_maturity: t,
        risk_free_rate: r,
        volatility: sigma,
    } = *params;

    if t <= 0.0 {
        return intrinsic_value(params, option_type);
    }

    let d1 = d1(params);
    let d2 = d2(d1, t, sigma);
    let discounted_strike = k * (-r * t).exp();

    match option_type {
        OptionType::Call => s * cdf(d1) - discounted_strike * cdf(d2),
        OptionType::Put => discounted_strike * cdf(-d2) - s * cdf(-d1),
    }
}

/// Delta, gamma, theta, vega and rho for both the call and the put.
///
/// `d1`/`d2` are recomputed on every call. No expiry special-casing: at `T == 0`
/// or `σ == 0` gamma is infinite or NaN and the caller must treat it as a boundary.
pub fn greeks(params: &OptionParameters) -> GreeksResult {
    let OptionParameters {
        spot: s,
        strike: k,
        time_to_maturity: t,
        risk_free_rate: r,
        volatility: sigma,
    } = *params;

    let d1 = d1(params);
    let d2 = d2(d1, t, sigma);
    let sqrt_t = t.sqrt();
    let discount = (-r * t).exp();
    let density = pdf(d1);

    let delta_call = cdf(d1);
    let gamma = density / (s * sigma * sqrt_t);

    let decay = -(s * density * sigma) / (2.0 * sqrt_t);
    let theta_call = decay - r * k * discount * cdf(d2);
    let theta_put = decay + r * k * discount * cdf(-d2);

    let vega = s * sqrt_t * density / 100.0;

    let rho_call = k * t * discount * cdf(d2) / 100.0;
    let rho_put = -k * t * discount * cdf(-d2) / 100.0;

    GreeksResult {
        delta: CallPut {
            call: delta_call,
            put: delta_call - 1.0,
        },
        gamma,
        theta: CallPut {
            call: theta_call,
            put: theta_put,
        },
        vega,
        rho: CallPut {
            call: rho_call,
            put: rho_put,
        },
    }
}
