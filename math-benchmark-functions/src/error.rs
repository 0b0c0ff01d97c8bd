//! Error types for benchmark function evaluation.
//!
//! Every failure is reported to the caller as is: a rejected batch aborts the
//! whole call and no partial output is produced.

use crate::Benchmark;
use thiserror::Error;

/// Errors that can occur while validating or evaluating a batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchmarkError {
    /// Input is not a 2D array of shape (n_samples, n_dimensions).
    #[error(
        "invalid input rank: expected a 2D array of shape (n_samples, n_dimensions), got {ndim}D. \
         Reshape your data to (n, 1) if it has a single feature or to (1, m) if it contains a single sample"
    )]
    Shape {
        /// Rank of the rejected input
        ndim: usize,
    },

    /// The batch has fewer dimensions than the function needs.
    #[error("{function} requires at least {required} dimensions, got {got}")]
    DimensionTooSmall {
        /// Function that rejected the batch
        function: Benchmark,
        /// Minimum number of dimensions
        required: usize,
        /// Number of dimensions in the batch
        got: usize,
    },

    /// No benchmark function is registered under this name.
    #[error("unknown benchmark function: {name}")]
    UnknownFunction {
        /// The name that was looked up
        name: String,
    },

    /// Nested rows do not all have the same length.
    #[error("ragged batch: row {row} has {got} elements, expected {expected}")]
    RaggedBatch {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        got: usize,
    },
}

/// A specialized `Result` type for benchmark evaluation.
pub type Result<T> = std::result::Result<T, BenchmarkError>;

impl BenchmarkError {
    /// Returns `true` if the input could not be read as a 2D batch.
    ///
    /// This includes `Shape` and `RaggedBatch` variants.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            BenchmarkError::Shape { .. } | BenchmarkError::RaggedBatch { .. }
        )
    }

    /// Returns `true` if the batch dimensionality is not supported.
    pub fn is_dimension_error(&self) -> bool {
        matches!(self, BenchmarkError::DimensionTooSmall { .. })
    }

    /// Returns `true` if a function name could not be resolved.
    pub fn is_lookup_error(&self) -> bool {
        matches!(self, BenchmarkError::UnknownFunction { .. })
    }
}
