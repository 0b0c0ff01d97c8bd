//! Rastrigin test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};
use std::f64::consts::PI;

/// Rastrigin function - N-dimensional multimodal, shifted by one along every axis
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Rastrigin.evaluate(input)
}

pub(crate) fn rastrigin_row(x: ArrayView1<'_, f64>) -> f64 {
    let a = 10.0;
    let n = x.len() as f64;
    a * n
        + x.iter()
            .map(|&xi| {
                let z = xi - 1.0;
                z.powi(2) - a * (2.0 * PI * z).cos()
            })
            .sum::<f64>()
}
