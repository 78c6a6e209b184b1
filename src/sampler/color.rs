//! Range normalization and two-color linear ramps for heat-map style encodings.
//!
//! This only serves the price surface's visual encoding; prices and Greeks never
//! go through it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Smallest and largest finite value, or `None` if there is none.
pub fn value_range<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// `(value - min) / (max - min)`.
///
/// A zero (or NaN) span is replaced by `1`, so a constant set maps to `0`
/// instead of dividing by zero.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let span = if span == 0.0 || span.is_nan() {
        1.0
    } else {
        span
    };
    (value - min) / span
}

/// Linear ramp between two endpoint colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(default = "default_low")]
    pub low: Rgb,
    #[serde(default = "default_high")]
    pub high: Rgb,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
        }
    }
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb) -> Self {
        Self { low, high }
    }

    /// Channel-wise interpolation at `ratio`, clamped to `[0, 1]`.
    pub fn interpolate(&self, ratio: f64) -> Rgb {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Rgb {
            r: lerp_channel(self.low.r, self.high.r, ratio),
            g: lerp_channel(self.low.g, self.high.g, ratio),
            b: lerp_channel(self.low.b, self.high.b, ratio),
        }
    }

    /// Color for `value` given the observed `[min, max]` of its set.
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> Rgb {
        self.interpolate(normalize(value, min, max))
    }
}

fn lerp_channel(from: u8, to: u8, ratio: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + ratio * (to - from)).round().clamp(0.0, 255.0) as u8
}

// #1e3a8a
fn default_low() -> Rgb {
    Rgb::new(30, 58, 138)
}

// #f97316
fn default_high() -> Rgb {
    Rgb::new(249, 115, 22)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_constant_set() {
        assert_eq!(normalize(4.2, 4.2, 4.2), 0.0);
    }

    #[test]
    fn test_normalize_span() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(0.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(10.0, 0.0, 10.0), 1.0);
    }

    #[test]
    fn test_value_range_skips_non_finite() {
        let r = value_range(vec![3.0, f64::NAN, -1.0, f64::INFINITY, 7.5]);
        assert_eq!(r, Some((-1.0, 7.5)));
        assert_eq!(value_range(vec![f64::NAN]), None);
        assert_eq!(value_range(Vec::new()), None);
    }

    #[test]
    fn test_scale_endpoints_and_midpoint() {
        let scale = ColorScale::default();
        assert_eq!(scale.interpolate(0.0), Rgb::new(30, 58, 138));
        assert_eq!(scale.interpolate(1.0), Rgb::new(249, 115, 22));
        // 30 + 0.5 * 219 = 139.5 -> 140, 58 + 28.5 = 86.5 -> 87, 138 - 58 = 80
        assert_eq!(scale.interpolate(0.5), Rgb::new(140, 87, 80));
        assert_eq!(scale.interpolate(2.0), scale.high);
        assert_eq!(scale.interpolate(f64::NAN), scale.low);
    }

    #[test]
    fn test_rgb_formatting() {
        let c = Rgb::new(249, 115, 22);
        assert_eq!(c.to_string(), "rgb(249,115,22)");
        assert_eq!(c.to_hex(), "#f97316");
    }
}
