use serde::Serialize;
use tracing::debug;

use super::axis::{SweepAxis, SweepSpec};
use crate::models::bs::{OptionParameters, Param};

/// One sample of a 1D sweep: the swept input and what was computed there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint<T> {
    pub x: f64,
    pub value: T,
}

/// One node of a 2D sweep: outer input `a`, inner input `b`, output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint<T> {
    pub a: f64,
    pub b: f64,
    pub value: T,
}

/// Output of [`sweep`], shaped by the spec it was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SweepOutput<T> {
    Series(Vec<SweepPoint<T>>),
    Grid(Vec<GridPoint<T>>),
}

impl<T> SweepOutput<T> {
    pub fn len(&self) -> usize {
        match self {
            SweepOutput::Series(points) => points.len(),
            SweepOutput::Grid(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluate `eval` at every sample of `axis`, holding every input other than
/// `param` at its value in `base`.
///
/// Points come back in increasing order of the swept input.
pub fn sweep_1d<T, F>(
    base: &OptionParameters,
    param: Param,
    axis: &SweepAxis,
    eval: F,
) -> Vec<SweepPoint<T>>
where
    F: Fn(&OptionParameters) -> T,
{
    debug!(%param, samples = axis.len(), "running 1D sweep");

    axis.values()
        .map(|x| SweepPoint {
            x,
            value: eval(&base.with(param, x)),
        })
        .collect()
}

/// Evaluate `eval` on the cartesian product of two axes.
///
/// The grid is flattened with `outer` varying slowest, so points are in
/// lexicographically increasing `(a, b)` order.
pub fn sweep_2d<T, F>(
    base: &OptionParameters,
    outer: (Param, &SweepAxis),
    inner: (Param, &SweepAxis),
    eval: F,
) -> Vec<GridPoint<T>>
where
    F: Fn(&OptionParameters) -> T,
{
    let (param_a, axis_a) = outer;
    let (param_b, axis_b) = inner;
    debug!(
        outer = %param_a,
        inner = %param_b,
        samples = axis_a.len() * axis_b.len(),
        "running 2D sweep"
    );

    let mut points = Vec::with_capacity(axis_a.len() * axis_b.len());
    for a in axis_a.values() {
        let row = base.with(param_a, a);
        for b in axis_b.values() {
            points.push(GridPoint {
                a,
                b,
                value: eval(&row.with(param_b, b)),
            });
        }
    }
    points
}

/// Run whichever sweep `spec` describes.
pub fn sweep<T, F>(base: &OptionParameters, spec: &SweepSpec, eval: F) -> SweepOutput<T>
where
    F: Fn(&OptionParameters) -> T,
{
    match spec {
        SweepSpec::Single { param, axis } => {
            SweepOutput::Series(sweep_1d(base, *param, axis, eval))
        }
        SweepSpec::Grid { outer, inner } => SweepOutput::Grid(sweep_2d(
            base,
            (outer.0, &outer.1),
            (inner.0, &inner.1),
            eval,
        )),
    }
}
