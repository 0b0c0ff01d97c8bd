//! Sphere test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// Sphere function - N-dimensional, isotropic baseline
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Sphere.evaluate(input)
}

pub(crate) fn sphere_row(x: ArrayView1<'_, f64>) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum()
}
