//! Schaffer test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// Schaffer function - strongly multimodal, summed over neighboring pairs
/// f(x) = sum_{i=0}^{m-2} r_i^0.25 (sin^2(50 r_i^0.1) + 1), r_i = x_i^2 + x_{i+1}^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schaffer<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::Schaffer.evaluate(input)
}

pub(crate) fn schaffer_row(x: ArrayView1<'_, f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&x1, &x2)| {
            let r = x1.powi(2) + x2.powi(2);
            r.powf(0.25) * ((50.0 * r.powf(0.1)).sin().powi(2) + 1.0)
        })
        .sum()
}
