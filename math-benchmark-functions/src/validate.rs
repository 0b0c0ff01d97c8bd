//! Input validation for evaluation batches

use crate::error::{BenchmarkError, Result};
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Dimension, Ix2};

/// View `input` as a batch of shape (n_samples, n_dimensions).
///
/// Accepts owned arrays, views and dynamic-rank arrays alike; only the
/// runtime rank is checked. Entries are not inspected, so NaN or infinite
/// values flow through to the output.
pub fn check<S, D>(input: &ArrayBase<S, D>) -> Result<ArrayView2<'_, f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = input.ndim();
    input
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| BenchmarkError::Shape { ndim })
}

/// Build a batch from nested rows, one row per sample.
///
/// All rows must have the same length. An empty slice gives a (0, 0) batch.
pub fn batch_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Array2<f64>> {
    let n_dims = rows.first().map_or(0, |row| row.as_ref().len());
    for (i, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != n_dims {
            return Err(BenchmarkError::RaggedBatch {
                row: i,
                expected: n_dims,
                got: len,
            });
        }
    }
    Ok(Array2::from_shape_fn((rows.len(), n_dims), |(i, j)| {
        rows[i].as_ref()[j]
    }))
}
