//! The three sweeps behind the pricing dashboard: price vs spot, the
//! spot × maturity price surface, and Greek profiles vs spot.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

use super::axis::SweepAxis;
use super::color::{value_range, ColorScale, Rgb};
use super::config::{SpotSweepConfig, SurfaceConfig};
use super::sweep::{sweep_1d, sweep_2d};
use crate::models::bs::{self, GreeksResult, OptionParameters, OptionType, Param};

/// Spot axis `[max(floor, S·(1 - f)), S·(1 + f)]` with `steps + 1` samples.
pub fn spot_axis(spot: f64, config: &SpotSweepConfig) -> Result<SweepAxis> {
    let start = config.floor.max(spot * (1.0 - config.range_fraction));
    let end = spot * (1.0 + config.range_fraction);
    SweepAxis::inclusive(start, end, config.steps)
        .with_context(|| format!("No spot range to sweep around S = {}", spot))
}

/// Call and put prices at one spot level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub spot: f64,
    pub call: f64,
    pub put: f64,
    /// Set on the sample where the sweep first reaches the base spot
    pub is_current: bool,
}

/// Call/put price as a function of spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCurve {
    pub base_spot: f64,
    pub points: Vec<PricePoint>,
}

impl PriceCurve {
    /// The highlighted sample, if the base spot falls inside the sweep.
    pub fn current(&self) -> Option<&PricePoint> {
        self.points.iter().find(|p| p.is_current)
    }

    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spot).collect()
    }
}

/// Sweep spot and price both the call and the put at every sample.
pub fn price_curve(params: &OptionParameters, config: &SpotSweepConfig) -> Result<PriceCurve> {
    let axis = spot_axis(params.spot, config)?;
    let samples = sweep_1d(params, Param::Spot, &axis, |p| {
        (bs::price(p, OptionType::Call), bs::price(p, OptionType::Put))
    });

    let base_spot = params.spot;
    let step = axis.step_size();
    let current = samples
        .iter()
        .position(|s| s.x >= base_spot)
        .filter(|&i| i > 0 || samples[0].x - step < base_spot);

    let points: Vec<PricePoint> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| PricePoint {
            spot: s.x,
            call: s.value.0,
            put: s.value.1,
            is_current: current == Some(i),
        })
        .collect();

    let non_finite = points
        .iter()
        .filter(|p| !p.call.is_finite() || !p.put.is_finite())
        .count();
    if non_finite > 0 {
        warn!(non_finite, total = points.len(), "price curve has non-finite prices");
    }

    Ok(PriceCurve { base_spot, points })
}

/// Call price at one (time, spot) node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfacePoint {
    pub time: f64,
    pub spot: f64,
    pub price: f64,
}

/// Call price over a spot × maturity grid, flattened spot-major.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSurface {
    pub spot_steps: usize,
    pub time_steps: usize,
    pub points: Vec<SurfacePoint>,
}

impl PriceSurface {
    /// Finite price range over the grid.
    pub fn range(&self) -> Option<(f64, f64)> {
        value_range(self.points.iter().map(|p| p.price))
    }

    /// Heat-map color of every node, in the same order as `points`.
    pub fn colors(&self, scale: &ColorScale) -> Vec<Rgb> {
        let (min, max) = self.range().unwrap_or((0.0, 0.0));
        self.points
            .iter()
            .map(|p| scale.color_for(p.price, min, max))
            .collect()
    }
}

/// Call price over spot ∈ `[low·S, high·S)` and time ∈ `[floor, max(T, horizon))`.
///
/// Neither axis reaches its upper bound: each has exactly `steps` samples.
pub fn price_surface(params: &OptionParameters, config: &SurfaceConfig) -> Result<PriceSurface> {
    let spot_axis = SweepAxis::exclusive(
        params.spot * config.spot_low,
        params.spot * config.spot_high,
        config.spot_steps,
    )
    .with_context(|| format!("No spot band for the surface around S = {}", params.spot))?;

    let horizon = params.time_to_maturity.max(config.min_time_horizon);
    let time_axis = SweepAxis::exclusive(config.time_floor, horizon, config.time_steps)
        .context("No maturity range for the surface")?;

    let grid = sweep_2d(
        params,
        (Param::Spot, &spot_axis),
        (Param::TimeToMaturity, &time_axis),
        |p| bs::price(p, OptionType::Call),
    );

    let points: Vec<SurfacePoint> = grid
        .into_iter()
        .map(|g| SurfacePoint {
            time: g.b,
            spot: g.a,
            price: g.value,
        })
        .collect();

    let non_finite = points.iter().filter(|p| !p.price.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, total = points.len(), "price surface has non-finite prices");
    }

    Ok(PriceSurface {
        spot_steps: spot_axis.len(),
        time_steps: time_axis.len(),
        points,
    })
}

/// Named Greek series, one per chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GreekSeries {
    DeltaCall,
    DeltaPut,
    Gamma,
    ThetaCall,
    ThetaPut,
    Vega,
    RhoCall,
    RhoPut,
}

impl GreekSeries {
    pub const ALL: [GreekSeries; 8] = [
        GreekSeries::DeltaCall,
        GreekSeries::DeltaPut,
        GreekSeries::Gamma,
        GreekSeries::ThetaCall,
        GreekSeries::ThetaPut,
        GreekSeries::Vega,
        GreekSeries::RhoCall,
        GreekSeries::RhoPut,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GreekSeries::DeltaCall => "deltaCall",
            GreekSeries::DeltaPut => "deltaPut",
            GreekSeries::Gamma => "gamma",
            GreekSeries::ThetaCall => "thetaCall",
            GreekSeries::ThetaPut => "thetaPut",
            GreekSeries::Vega => "vega",
            GreekSeries::RhoCall => "rhoCall",
            GreekSeries::RhoPut => "rhoPut",
        }
    }

    pub fn extract(&self, g: &GreeksResult) -> f64 {
        match self {
            GreekSeries::DeltaCall => g.delta.call,
            GreekSeries::DeltaPut => g.delta.put,
            GreekSeries::Gamma => g.gamma,
            GreekSeries::ThetaCall => g.theta.call,
            GreekSeries::ThetaPut => g.theta.put,
            GreekSeries::Vega => g.vega,
            GreekSeries::RhoCall => g.rho.call,
            GreekSeries::RhoPut => g.rho.put,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GreeksPoint {
    pub spot: f64,
    pub greeks: GreeksResult,
}

/// Full Greeks record at every spot sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreeksCurve {
    pub points: Vec<GreeksPoint>,
}

impl GreeksCurve {
    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spot).collect()
    }

    pub fn series(&self, which: GreekSeries) -> Vec<f64> {
        self.points.iter().map(|p| which.extract(&p.greeks)).collect()
    }

    /// Every series keyed by its chart name.
    pub fn all_series(&self) -> BTreeMap<&'static str, Vec<f64>> {
        GreekSeries::ALL
            .iter()
            .map(|s| (s.name(), self.series(*s)))
            .collect()
    }
}

/// Sweep spot and compute the full Greeks record at every sample.
pub fn greeks_curve(params: &OptionParameters, config: &SpotSweepConfig) -> Result<GreeksCurve> {
    let axis = spot_axis(params.spot, config)?;
    let points: Vec<GreeksPoint> = sweep_1d(params, Param::Spot, &axis, bs::greeks)
        .into_iter()
        .map(|s| GreeksPoint {
            spot: s.x,
            greeks: s.value,
        })
        .collect();

    let non_finite = points
        .iter()
        .filter(|p| GreekSeries::ALL.iter().any(|s| !s.extract(&p.greeks).is_finite()))
        .count();
    if non_finite > 0 {
        warn!(non_finite, total = points.len(), "Greeks curve has non-finite values");
    }

    Ok(GreeksCurve { points })
}
