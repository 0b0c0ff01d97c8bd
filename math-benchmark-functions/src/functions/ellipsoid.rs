//! Ellipsoid test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// Ellipsoid function - weak ill-scale
/// Axis i is scaled by 1000^(i / (m - 1)), so the last axis weighs 10^6 times
/// more than the first. Needs at least 2 dimensions.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn ellipsoid<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Ellipsoid.evaluate(input)
}

pub(crate) fn ellipsoid_row(x: ArrayView1<'_, f64>) -> f64 {
    let last = (x.len() - 1) as f64;
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (xi * 1000f64.powf(i as f64 / last)).powi(2))
        .sum()
}
