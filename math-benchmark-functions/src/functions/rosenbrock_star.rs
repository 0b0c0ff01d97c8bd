//! Star-shaped Rosenbrock test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// Rosenbrock function, star coupling
/// Every axis after the first is coupled to x_0:
/// f(x) = sum_{i=1}^{m-1} 100 (x_0 - x_i^2)^2 + (1 - x_i)^2
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock_star<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::RosenbrockStar.evaluate(input)
}

pub(crate) fn rosenbrock_star_row(x: ArrayView1<'_, f64>) -> f64 {
    let x0 = x[0];
    x.iter()
        .skip(1)
        .map(|&xi| 100.0 * (x0 - xi.powi(2)).powi(2) + (1.0 - xi).powi(2))
        .sum()
}
