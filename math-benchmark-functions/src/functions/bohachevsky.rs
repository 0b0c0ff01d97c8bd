//! Bohachevsky test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};
use std::f64::consts::PI;

/// Bohachevsky function - N-dimensional generalization over neighboring pairs
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn bohachevsky<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Bohachevsky.evaluate(input)
}

pub(crate) fn bohachevsky_row(x: ArrayView1<'_, f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&x1, &x2)| {
            x1.powi(2) + 2.0 * x2.powi(2) - 0.3 * (3.0 * PI * x1).cos() - 0.4 * (4.0 * PI * x2).cos()
                + 0.7
        })
        .sum()
}
