use anyhow::{bail, Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use super::color::ColorScale;

/// Spot sweep centred on the base spot: `[max(floor, S·(1 - f)), S·(1 + f)]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotSweepConfig {
    /// Half-width of the sweep as a fraction of spot
    #[serde(default = "default_range_fraction")]
    pub range_fraction: f64,
    /// Strictly positive lower bound on the swept spot, keeps `ln(S/K)` defined
    #[serde(default = "default_spot_floor")]
    pub floor: f64,
    /// Number of intervals; the curve has `steps + 1` points
    #[serde(default = "default_price_steps")]
    pub steps: usize,
}

impl Default for SpotSweepConfig {
    fn default() -> Self {
        Self::price_curve()
    }
}

impl SpotSweepConfig {
    /// 50 intervals, as used for the price-vs-spot chart
    pub fn price_curve() -> Self {
        Self {
            range_fraction: default_range_fraction(),
            floor: default_spot_floor(),
            steps: default_price_steps(),
        }
    }

    /// 40 intervals, as used for the Greek profiles
    pub fn greeks_curve() -> Self {
        Self {
            steps: default_greeks_steps(),
            ..Self::price_curve()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.range_fraction > 0.0) {
            bail!("range_fraction must be positive, got {}", self.range_fraction);
        }
        if !(self.floor > 0.0) {
            bail!("Spot floor must be strictly positive, got {}", self.floor);
        }
        if self.steps == 0 {
            bail!("Spot sweep needs at least one step");
        }
        Ok(())
    }
}

/// Spot × time grid for the price surface.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SurfaceConfig {
    /// Lower spot bound as a multiple of spot
    #[serde(default = "default_spot_low")]
    pub spot_low: f64,
    /// Upper spot bound as a multiple of spot
    #[serde(default = "default_spot_high")]
    pub spot_high: f64,
    #[serde(default = "default_surface_steps")]
    pub spot_steps: usize,
    /// Shortest maturity sampled; keeps the grid off the T = 0 boundary
    #[serde(default = "default_time_floor")]
    pub time_floor: f64,
    /// The time axis always reaches at least this far (years)
    #[serde(default = "default_min_time_horizon")]
    pub min_time_horizon: f64,
    #[serde(default = "default_surface_steps")]
    pub time_steps: usize,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            spot_low: default_spot_low(),
            spot_high: default_spot_high(),
            spot_steps: default_surface_steps(),
            time_floor: default_time_floor(),
            min_time_horizon: default_min_time_horizon(),
            time_steps: default_surface_steps(),
        }
    }
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.spot_low > 0.0) || !(self.spot_high > self.spot_low) {
            bail!(
                "Surface spot band must satisfy 0 < spot_low < spot_high, got [{}, {}]",
                self.spot_low,
                self.spot_high
            );
        }
        if !(self.time_floor > 0.0) {
            bail!("Time floor must be strictly positive, got {}", self.time_floor);
        }
        if !(self.min_time_horizon > self.time_floor) {
            bail!(
                "min_time_horizon ({}) must exceed time_floor ({})",
                self.min_time_horizon,
                self.time_floor
            );
        }
        if self.spot_steps == 0 || self.time_steps == 0 {
            bail!("Surface needs at least one step on each axis");
        }
        Ok(())
    }
}

/// Settings for every dashboard sweep.
///
/// Missing sections fall back to the dashboard defaults, so an empty TOML
/// document is a valid configuration. A field left out of a section that is
/// present keeps that section's preset value, e.g. `steps = 40` inside
/// `[greeks_curve]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "SpotSweepConfig::price_curve")]
    pub price_curve: SpotSweepConfig,

    #[serde(
        default = "SpotSweepConfig::greeks_curve",
        deserialize_with = "greeks_curve_section"
    )]
    pub greeks_curve: SpotSweepConfig,

    #[serde(default)]
    pub surface: SurfaceConfig,

    #[serde(default)]
    pub colors: ColorScale,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl SamplerConfig {
    /// Grid sizes of the interactive dashboard: 50-step price curve,
    /// 40-step Greek profiles, 20×20 surface.
    pub fn dashboard() -> Self {
        Self {
            price_curve: SpotSweepConfig::price_curve(),
            greeks_curve: SpotSweepConfig::greeks_curve(),
            surface: SurfaceConfig::default(),
            colors: ColorScale::default(),
        }
    }

    /// Denser grids for static reports
    pub fn fine() -> Self {
        Self {
            price_curve: SpotSweepConfig {
                steps: 200,
                ..SpotSweepConfig::price_curve()
            },
            greeks_curve: SpotSweepConfig {
                steps: 200,
                ..SpotSweepConfig::greeks_curve()
            },
            surface: SurfaceConfig {
                spot_steps: 60,
                time_steps: 60,
                ..SurfaceConfig::default()
            },
            colors: ColorScale::default(),
        }
    }

    /// Cheap grids for previews
    pub fn coarse() -> Self {
        Self {
            price_curve: SpotSweepConfig {
                steps: 10,
                ..SpotSweepConfig::price_curve()
            },
            greeks_curve: SpotSweepConfig {
                steps: 10,
                ..SpotSweepConfig::greeks_curve()
            },
            surface: SurfaceConfig {
                spot_steps: 5,
                time_steps: 5,
                ..SurfaceConfig::default()
            },
            colors: ColorScale::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SamplerConfig =
            toml::from_str(s).context("Failed to parse sampler configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        self.price_curve
            .validate()
            .context("Invalid [price_curve] section")?;
        self.greeks_curve
            .validate()
            .context("Invalid [greeks_curve] section")?;
        self.surface.validate().context("Invalid [surface] section")?;
        Ok(())
    }
}

/// Fields a spot sweep section may override; anything absent keeps the preset.
#[derive(Deserialize)]
struct SpotSweepOverrides {
    range_fraction: Option<f64>,
    floor: Option<f64>,
    steps: Option<usize>,
}

impl SpotSweepOverrides {
    fn apply(self, preset: SpotSweepConfig) -> SpotSweepConfig {
        SpotSweepConfig {
            range_fraction: self.range_fraction.unwrap_or(preset.range_fraction),
            floor: self.floor.unwrap_or(preset.floor),
            steps: self.steps.unwrap_or(preset.steps),
        }
    }
}

fn greeks_curve_section<'de, D>(deserializer: D) -> std::result::Result<SpotSweepConfig, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = SpotSweepOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(SpotSweepConfig::greeks_curve()))
}

fn default_range_fraction() -> f64 {
    0.5
}

fn default_spot_floor() -> f64 {
    1.0
}

fn default_price_steps() -> usize {
    50
}

fn default_greeks_steps() -> usize {
    40
}

fn default_spot_low() -> f64 {
    0.8
}

fn default_spot_high() -> f64 {
    1.2
}

fn default_surface_steps() -> usize {
    20
}

fn default_time_floor() -> f64 {
    0.01
}

fn default_min_time_horizon() -> f64 {
    1.0
}
