//! # BS-Sensitivity-Lib: Black-Scholes Pricing, Greeks and Parameter Sweeps
//!
//! `bs-sensitivity-lib` prices European options under the Black-Scholes model,
//! computes their first-order Greeks and samples both across ranges of market
//! inputs to feed charts: price-vs-spot curves, spot × maturity price surfaces
//! and Greek profiles.
//!
//! ## Core Features
//!
//! - **Pricing Kernel**: closed-form call/put prices with an intrinsic-value
//!   fallback at expiry
//! - **Greeks**: delta, gamma, theta, vega and rho for both option types
//! - **Sensitivity Sampler**: 1D and 2D sweeps over any input, in axis order
//! - **Heat-map helpers**: range normalization and two-color ramps
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_sensitivity_lib::{greeks, price, OptionParameters, OptionType};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//!
//! let call = price(&params, OptionType::Call);
//! let put = price(&params, OptionType::Put);
//! assert!((call - 10.4506).abs() < 1e-3);
//! assert!((put - 5.5735).abs() < 1e-3);
//!
//! let g = greeks(&params);
//! assert!((g.delta.call - g.delta.put - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Numerical Notes
//!
//! The normal CDF is a fixed-coefficient rational approximation (about `1e-7`
//! absolute error), not an exact special-function evaluation. Degenerate inputs
//! never raise: `σ = 0` or `T = 0` pins `d1` to `0`, gamma becomes non-finite,
//! and pricing at `T <= 0` returns intrinsic value. Input validation is left to
//! the caller.
//!
//! ## Configuration Presets
//!
//! Sweep grids are configured through [`SamplerConfig`]:
//! - `dashboard()`: 50-step price curve, 40-step Greeks, 20×20 surface
//! - `fine()`: dense grids for reports
//! - `coarse()`: quick previews

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod sampler;

// ================================================================================================
// IMPORTS
// ================================================================================================

use anyhow::Result;
use tracing::debug;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Kernel types and functions
pub use models::bs::{
    d1, d2, greeks, intrinsic_value, price, CallPut, GreeksResult, OptionGreeks,
    OptionParameters, OptionType, Param,
};
pub use models::normal::{cdf, cdf_exact, pdf};

// Sampler types and functions
pub use sampler::{
    greeks_curve, normalize, price_curve, price_surface, spot_axis, sweep, sweep_1d, sweep_2d,
    value_range, ColorScale, Endpoint, GreekSeries, GreeksCurve, GreeksPoint, GridPoint,
    PriceCurve, PricePoint, PriceSurface, Rgb, SamplerConfig, SpotSweepConfig, SurfaceConfig,
    SurfacePoint, SweepAxis, SweepOutput, SweepPoint, SweepSpec,
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured sweep settings.
///
/// # Available Configurations
///
/// - [`dashboard()`]: the grid sizes of the interactive dashboard
/// - [`fine()`]: dense grids for static reports
/// - [`coarse()`]: cheap grids for previews and tests
pub mod default_configs {
    use crate::sampler::config::SamplerConfig;

    /// Grid sizes used by the interactive dashboard.
    ///
    /// **Characteristics:**
    /// - Price curve: spot ±50% (floored at 1.0), 50 intervals
    /// - Greek profiles: same range, 40 intervals
    /// - Surface: spot 0.8S..1.2S × time 0.01..max(T, 1y), 20×20 nodes
    ///
    /// # Example
    ///
    /// ```rust
    /// use bs_sensitivity_lib::default_configs;
    ///
    /// let config = default_configs::dashboard();
    /// assert_eq!(config.price_curve.steps, 50);
    /// ```
    pub fn dashboard() -> SamplerConfig {
        SamplerConfig::dashboard()
    }

    /// Dense configuration for static reports.
    ///
    /// **Characteristics:**
    /// - 200-interval spot curves
    /// - 60×60 surface
    pub fn fine() -> SamplerConfig {
        SamplerConfig::fine()
    }

    /// Coarse configuration for previews.
    ///
    /// **Characteristics:**
    /// - 10-interval spot curves
    /// - 5×5 surface
    pub fn coarse() -> SamplerConfig {
        SamplerConfig::coarse()
    }
}

/// Everything a pricing dashboard draws for one parameter set.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardSeries {
    /// The inputs every series was computed from
    pub params: OptionParameters,
    /// Headline call price at `params`
    pub call_price: f64,
    /// Headline put price at `params`
    pub put_price: f64,
    /// Greeks at `params`
    pub greeks: GreeksResult,
    /// Call/put price vs spot
    pub price_curve: PriceCurve,
    /// Call price over spot × maturity
    pub surface: PriceSurface,
    /// Heat-map color for each surface node, aligned with `surface.points`
    pub surface_colors: Vec<Rgb>,
    /// Greeks vs spot
    pub greeks_curve: GreeksCurve,
}

/// Compute every series a pricing dashboard needs in one pass.
///
/// The caller owns `params`; nothing here reads shared state, so the function
/// can be called from any thread for any number of parameter sets.
///
/// # Arguments
///
/// * `params` - Market inputs (spot, strike, maturity, rate, volatility)
/// * `config` - Grid settings; see [`default_configs`]
///
/// # Errors
///
/// * `anyhow::Error` if a sweep range is empty for these inputs, e.g. a spot
///   below `2/3` where the 1.0 floor exceeds the upper bound of the spot sweep,
///   or a non-positive spot for the surface band.
///
/// # Example
///
/// ```rust
/// use bs_sensitivity_lib::{compute_dashboard, default_configs, OptionParameters};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let series = compute_dashboard(&params, &default_configs::dashboard())?;
///
/// assert_eq!(series.price_curve.points.len(), 51);
/// assert_eq!(series.surface.points.len(), 400);
/// assert_eq!(series.surface_colors.len(), 400);
/// assert_eq!(series.greeks_curve.points.len(), 41);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn compute_dashboard(
    params: &OptionParameters,
    config: &SamplerConfig,
) -> Result<DashboardSeries> {
    debug!(?params, "computing dashboard series");

    let price_curve = price_curve(params, &config.price_curve)?;
    let surface = price_surface(params, &config.surface)?;
    let surface_colors = surface.colors(&config.colors);
    let greeks_curve = greeks_curve(params, &config.greeks_curve)?;

    Ok(DashboardSeries {
        params: *params,
        call_price: price(params, OptionType::Call),
        put_price: price(params, OptionType::Put),
        greeks: greeks(params),
        price_curve,
        surface,
        surface_colors,
        greeks_curve,
    })
}
