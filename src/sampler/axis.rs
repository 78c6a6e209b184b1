use anyhow::{bail, Result};
use serde::Serialize;

use crate::models::bs::Param;

/// Whether the upper bound of an axis is itself sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Endpoint {
    /// `steps + 1` samples, last one at `end`
    #[default]
    Inclusive,
    /// `steps` samples, last one at `end - step`
    Exclusive,
}

/// Evenly spaced, strictly increasing sample positions over `[start, end]`.
///
/// Sample `i` sits at `start + i * (end - start) / steps`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepAxis {
    start: f64,
    end: f64,
    steps: usize,
    endpoint: Endpoint,
}

impl SweepAxis {
    pub fn new(start: f64, end: f64, steps: usize, endpoint: Endpoint) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            bail!("Sweep bounds must be finite, got [{}, {}]", start, end);
        }
        if start >= end {
            bail!("Sweep start must be below end, got [{}, {}]", start, end);
        }
        if steps == 0 {
            bail!("Sweep needs at least one step");
        }
        let axis = Self {
            start,
            end,
            steps,
            endpoint,
        };
        if !axis.step_size().is_finite() {
            bail!("Sweep span [{}, {}] overflows", start, end);
        }
        // every sample must land on a distinct, larger f64
        let mut prev = start;
        for i in 1..axis.len() {
            let value = axis.value_at(i);
            if value <= prev {
                bail!(
                    "Sweep [{}, {}] is too narrow for {} steps: samples {} and {} coincide",
                    start,
                    end,
                    steps,
                    i - 1,
                    i
                );
            }
            prev = value;
        }
        Ok(axis)
    }

    /// Axis including its upper bound.
    pub fn inclusive(start: f64, end: f64, steps: usize) -> Result<Self> {
        Self::new(start, end, steps, Endpoint::Inclusive)
    }

    /// Axis stopping one step short of its upper bound.
    pub fn exclusive(start: f64, end: f64, steps: usize) -> Result<Self> {
        Self::new(start, end, steps, Endpoint::Exclusive)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Distance between consecutive samples.
    pub fn step_size(&self) -> f64 {
        (self.end - self.start) / self.steps as f64
    }

    /// Number of samples produced.
    pub fn len(&self) -> usize {
        match self.endpoint {
            Endpoint::Inclusive => self.steps + 1,
            Endpoint::Exclusive => self.steps,
        }
    }

    /// Always false: a valid axis has at least one sample.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of sample `i`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step_size()
    }

    /// All sample positions in increasing order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.value_at(i))
    }
}

/// Which inputs a sweep perturbs and over what range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SweepSpec {
    /// One swept input.
    Single { param: Param, axis: SweepAxis },
    /// Two swept inputs; `outer` varies slowest in the flattened output.
    Grid {
        outer: (Param, SweepAxis),
        inner: (Param, SweepAxis),
    },
}

impl SweepSpec {
    /// Total number of kernel evaluations this spec implies.
    pub fn sample_count(&self) -> usize {
        match self {
            SweepSpec::Single { axis, .. } => axis.len(),
            SweepSpec::Grid { outer, inner } => outer.1.len() * inner.1.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_axis_hits_both_bounds() {
        let axis = SweepAxis::inclusive(50.0, 150.0, 50).unwrap();
        let values: Vec<f64> = axis.values().collect();

        assert_eq!(values.len(), 51);
        assert_eq!(values[0], 50.0);
        assert!((values[50] - 150.0).abs() < 1e-9);
        assert!((axis.step_size() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_exclusive_axis_stops_short() {
        let axis = SweepAxis::exclusive(80.0, 120.0, 20).unwrap();
        let values: Vec<f64> = axis.values().collect();

        assert_eq!(values.len(), 20);
        assert!((values[19] - 118.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_rejects_bad_ranges() {
        assert!(SweepAxis::inclusive(10.0, 10.0, 5).is_err());
        assert!(SweepAxis::inclusive(10.0, 5.0, 5).is_err());
        assert!(SweepAxis::inclusive(0.0, 1.0, 0).is_err());
        assert!(SweepAxis::inclusive(f64::NAN, 1.0, 3).is_err());
        assert!(SweepAxis::inclusive(0.0, f64::INFINITY, 3).is_err());
    }

    #[test]
    fn test_axis_rejects_spans_below_resolution() {
        assert!(SweepAxis::inclusive(1.0, 1.0 + 1e-15, 50).is_err());
        assert!(SweepAxis::exclusive(1e6, 1e6 + 1e-9, 20).is_err());
        assert!(SweepAxis::inclusive(-f64::MAX, f64::MAX, 4).is_err());
        // a single-sample axis has nothing to collide with
        assert!(SweepAxis::exclusive(1.0, 1.0 + 1e-15, 1).is_ok());
    }

    #[test]
    fn test_accepted_axis_is_strictly_increasing() {
        let axis = SweepAxis::inclusive(1.0, 1.0 + 1e-12, 50).unwrap();
        let values: Vec<f64> = axis.values().collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_count() {
        let a = SweepAxis::exclusive(0.0, 1.0, 20).unwrap();
        let b = SweepAxis::exclusive(0.0, 1.0, 10).unwrap();
        let grid = SweepSpec::Grid {
            outer: (Param::Spot, a),
            inner: (Param::TimeToMaturity, b),
        };
        assert_eq!(grid.sample_count(), 200);

        let single = SweepSpec::Single {
            param: Param::Volatility,
            axis: SweepAxis::inclusive(0.1, 0.5, 4).unwrap(),
        };
        assert_eq!(single.sample_count(), 5);
    }
}
