//! Chained Rosenbrock test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// Rosenbrock function, chain coupling
/// Each axis is coupled to its predecessor:
/// f(x) = sum_{i=1}^{m-1} 100 (x_i - x_{i-1}^2)^2 + (1 - x_{i-1})^2
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock_chain<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::RosenbrockChain.evaluate(input)
}

pub(crate) fn rosenbrock_chain_row(x: ArrayView1<'_, f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&prev, &next)| 100.0 * (next - prev.powi(2)).powi(2) + (1.0 - prev).powi(2))
        .sum()
}
