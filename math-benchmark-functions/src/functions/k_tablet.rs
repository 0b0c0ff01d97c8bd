//! k-Tablet test function

use crate::error::Result;
use crate::Benchmark;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Dimension};

/// k-Tablet function - strong ill-scale
/// The first k = ceil(m / 4) axes are left as is, every other axis is
/// scaled by 100.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn k_tablet<S, D>(input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Benchmark::KTablet.evaluate(input)
}

pub(crate) fn k_tablet_row(x: ArrayView1<'_, f64>) -> f64 {
    let k = x.len().div_ceil(4);
    let head: f64 = x.iter().take(k).map(|&xi| xi.powi(2)).sum();
    let tail: f64 = x.iter().skip(k).map(|&xi| (100.0 * xi).powi(2)).sum();
    head + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_k_tablet_four_dimensions() {
        // k = 1: only the first axis is unscaled
        let out = k_tablet(&array![[1.0, 1.0, 1.0, 1.0]]).unwrap();
        assert_relative_eq!(out[0], 30001.0);
    }

    #[test]
    fn test_k_tablet_split_point() {
        // m = 5 gives k = 2
        let out = k_tablet(&array![[1.0, 1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0, 0.0]]).unwrap();
        assert_relative_eq!(out[0], 2.0);
        assert_relative_eq!(out[1], 10000.0);

        // a single axis is never scaled
        let out = k_tablet(&array![[3.0]]).unwrap();
        assert_relative_eq!(out[0], 9.0);
    }

    #[test]
    fn test_k_tablet_at_optimum() {
        let x = Benchmark::KTablet.optimal_solution(12);
        let out = k_tablet(&x.insert_axis(ndarray::Axis(0))).unwrap();
        assert_eq!(out[0], 0.0);
    }
}
