//! Ackley test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};
use std::f64::consts::{E, PI};

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-32.768, 32.768]
pub fn ackley<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Ackley.evaluate(input)
}

pub(crate) fn ackley_row(x: ArrayView1<'_, f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    20.0 - 20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() + E - (sum_cos / n).exp()
}
