//! Benchmark function implementations, one module per function.
//!
//! Each module exposes a batch function taking a (n_samples, n_dimensions)
//! array and a crate-private row kernel that computes one output value.

use ndarray::{Array1, ArrayView1, ArrayView2};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

pub mod ackley;
pub mod bohachevsky;
pub mod ellipsoid;
pub mod k_tablet;
pub mod rastrigin;
pub mod rosenbrock_chain;
pub mod rosenbrock_star;
pub mod schaffer;
pub mod sphere;

pub use ackley::ackley;
pub use bohachevsky::bohachevsky;
pub use ellipsoid::ellipsoid;
pub use k_tablet::k_tablet;
pub use rastrigin::rastrigin;
pub use rosenbrock_chain::rosenbrock_chain;
pub use rosenbrock_star::rosenbrock_star;
pub use schaffer::schaffer;
pub use sphere::sphere;

/// Per-row formula of a benchmark function
pub type RowKernel = for<'a> fn(ArrayView1<'a, f64>) -> f64;

/// Batches with at least this many rows are split across threads when the
/// `rayon` feature is enabled.
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Apply `kernel` to every row of `batch`.
pub(crate) fn map_rows(batch: ArrayView2<'_, f64>, kernel: RowKernel) -> Array1<f64> {
    #[cfg(feature = "rayon")]
    {
        if batch.nrows() >= PARALLEL_THRESHOLD {
            return map_rows_parallel(batch, kernel);
        }
    }
    map_rows_sequential(batch, kernel)
}

fn map_rows_sequential(batch: ArrayView2<'_, f64>, kernel: RowKernel) -> Array1<f64> {
    batch.outer_iter().map(kernel).collect()
}

#[cfg(feature = "rayon")]
fn map_rows_parallel(batch: ArrayView2<'_, f64>, kernel: RowKernel) -> Array1<f64> {
    let values: Vec<f64> = (0..batch.nrows())
        .into_par_iter()
        .map(|i| kernel(batch.row(i)))
        .collect();
    Array1::from_vec(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    fn row_sum(x: ArrayView1<'_, f64>) -> f64 {
        x.sum()
    }

    #[test]
    fn test_map_rows_one_value_per_row() {
        let batch = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let out = map_rows(batch.view(), row_sum);
        assert_eq!(out, array![3.0, 7.0, 11.0]);
    }

    #[test]
    fn test_map_rows_empty_batch() {
        let batch = Array2::<f64>::zeros((0, 3));
        assert!(map_rows(batch.view(), row_sum).is_empty());
    }

    #[test]
    fn test_map_rows_large_batch() {
        let n = PARALLEL_THRESHOLD + 7;
        let batch = Array2::from_shape_fn((n, 3), |(i, j)| (i * 3 + j) as f64);
        let out = map_rows(batch.view(), row_sum);
        assert_eq!(out.len(), n);
        for (i, &value) in out.iter().enumerate() {
            assert_eq!(value, (9 * i + 3) as f64);
        }
    }

    #[test]
    fn test_map_rows_non_contiguous_view() {
        let batch = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let transposed = batch.t();
        let out = map_rows(transposed, row_sum);
        assert_eq!(out, array![5.0, 7.0, 9.0]);
    }
}
