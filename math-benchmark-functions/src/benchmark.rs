//! Registry of the benchmark functions
//!
//! The catalogue is closed: every function is a [`Benchmark`] variant, and the
//! search area, optimal solution and supported dimensionality of each one are
//! answered by `match` arms so a missing entry is a compile error.

use crate::error::{BenchmarkError, Result};
use crate::functions::{self, RowKernel};
use crate::validate::check;
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Dimension};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A benchmark function of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Benchmark {
    /// Basic isotropic function
    Sphere,
    /// Weak ill-scale
    Ellipsoid,
    /// Strong ill-scale
    KTablet,
    /// Strong parameter dependency between x1 and the others
    RosenbrockStar,
    /// Strong parameter dependency between neighboring parameters
    RosenbrockChain,
    /// Weak multimodality
    Bohachevsky,
    /// Weak multimodality
    Ackley,
    /// Strong multimodality
    Schaffer,
    /// Strong multimodality, optimum shifted to (1, ..., 1)
    Rastrigin,
}

/// Per-axis search area `[low, high]`, shared by every dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchArea {
    /// Lower bound
    pub low: f64,
    /// Upper bound
    pub high: f64,
}

/// Shape of the global optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Optimum {
    /// (0, ..., 0)
    Zeros,
    /// (1, ..., 1)
    Ones,
}

impl Optimum {
    /// Coordinate value repeated along every axis.
    pub fn coordinate(&self) -> f64 {
        match self {
            Optimum::Zeros => 0.0,
            Optimum::Ones => 1.0,
        }
    }

    /// The optimal point in `dimension` dimensions. Zero gives an empty vector.
    pub fn point(&self, dimension: usize) -> Array1<f64> {
        Array1::from_elem(dimension, self.coordinate())
    }
}

impl SearchArea {
    /// Create a search area from its bounds
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Bounds as `[low, high]`
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Width of the area along one axis
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// `(low, high)` pair repeated for `n` dimensions
    pub fn bounds(&self, n: usize) -> Vec<(f64, f64)> {
        vec![(self.low, self.high); n]
    }

    /// Bounds matrix for optimization (2 x n matrix)
    /// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
    pub fn bounds_matrix(&self, n: usize) -> Array2<f64> {
        Array2::from_shape_fn((2, n), |(i, _)| if i == 0 { self.low } else { self.high })
    }

    /// Whether every coordinate of `x` lies inside the area (bounds included).
    pub fn contains(&self, x: ArrayView1<'_, f64>) -> bool {
        x.iter().all(|&xi| xi >= self.low && xi <= self.high)
    }

    /// Draw `n_samples` points uniformly from the area.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n_samples: usize,
        dimension: usize,
        rng: &mut R,
    ) -> Array2<f64> {
        let width = self.width();
        Array2::from_shape_fn((n_samples, dimension), |_| {
            let u: f64 = rng.random::<f64>();
            self.low + u * width
        })
    }
}

impl From<SearchArea> for [f64; 2] {
    fn from(area: SearchArea) -> Self {
        area.as_array()
    }
}

impl Benchmark {
    /// Every benchmark function, in catalogue order.
    pub const ALL: [Benchmark; 9] = [
        Benchmark::Sphere,
        Benchmark::Ellipsoid,
        Benchmark::KTablet,
        Benchmark::RosenbrockStar,
        Benchmark::RosenbrockChain,
        Benchmark::Bohachevsky,
        Benchmark::Ackley,
        Benchmark::Schaffer,
        Benchmark::Rastrigin,
    ];

    /// Registry name, e.g. `"k_tablet"`.
    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Sphere => "sphere",
            Benchmark::Ellipsoid => "ellipsoid",
            Benchmark::KTablet => "k_tablet",
            Benchmark::RosenbrockStar => "rosenbrock_star",
            Benchmark::RosenbrockChain => "rosenbrock_chain",
            Benchmark::Bohachevsky => "bohachevsky",
            Benchmark::Ackley => "ackley",
            Benchmark::Schaffer => "schaffer",
            Benchmark::Rastrigin => "rastrigin",
        }
    }

    /// Conventional sampling domain of the function.
    pub fn search_area(&self) -> SearchArea {
        match self {
            Benchmark::Sphere
            | Benchmark::Ellipsoid
            | Benchmark::KTablet
            | Benchmark::Bohachevsky
            | Benchmark::Rastrigin => SearchArea::new(-5.12, 5.12),
            Benchmark::RosenbrockStar | Benchmark::RosenbrockChain => {
                SearchArea::new(-2.048, 2.048)
            }
            Benchmark::Ackley => SearchArea::new(-32.768, 32.768),
            Benchmark::Schaffer => SearchArea::new(-100.0, 100.0),
        }
    }

    /// Where the global optimum lies.
    pub fn optimum(&self) -> Optimum {
        match self {
            Benchmark::RosenbrockStar | Benchmark::RosenbrockChain | Benchmark::Rastrigin => {
                Optimum::Ones
            }
            Benchmark::Sphere
            | Benchmark::Ellipsoid
            | Benchmark::KTablet
            | Benchmark::Bohachevsky
            | Benchmark::Ackley
            | Benchmark::Schaffer => Optimum::Zeros,
        }
    }

    /// The optimal solution in `dimension` dimensions.
    pub fn optimal_solution(&self, dimension: usize) -> Array1<f64> {
        self.optimum().point(dimension)
    }

    /// Smallest number of dimensions the function is defined for.
    ///
    /// Functions coupling neighboring axes (and the ellipsoid, whose axis
    /// coefficients divide by `m - 1`) need two; Ackley averages over the axes
    /// and needs one.
    pub fn min_dimension(&self) -> usize {
        match self {
            Benchmark::Sphere | Benchmark::KTablet | Benchmark::Rastrigin => 0,
            Benchmark::Ackley => 1,
            Benchmark::Ellipsoid
            | Benchmark::RosenbrockStar
            | Benchmark::RosenbrockChain
            | Benchmark::Bohachevsky
            | Benchmark::Schaffer => 2,
        }
    }

    /// Short description of the landscape property the function exercises.
    pub fn description(&self) -> &'static str {
        match self {
            Benchmark::Sphere => "Basic function",
            Benchmark::Ellipsoid => "Weak ill-scale",
            Benchmark::KTablet => "Strong ill-scale",
            Benchmark::RosenbrockStar => "Strong parameter dependency between x1 and the others",
            Benchmark::RosenbrockChain => "Strong parameter dependency between neighboring parameters",
            Benchmark::Bohachevsky => "Weak multimodality",
            Benchmark::Ackley => "Weak multimodality",
            Benchmark::Schaffer => "Strong multimodality",
            Benchmark::Rastrigin => "Strong multimodality",
        }
    }

    /// Whether the function has local optima besides the global one.
    pub fn is_multimodal(&self) -> bool {
        matches!(
            self,
            Benchmark::Bohachevsky | Benchmark::Ackley | Benchmark::Schaffer | Benchmark::Rastrigin
        )
    }

    pub(crate) fn kernel(&self) -> RowKernel {
        match self {
            Benchmark::Sphere => functions::sphere::sphere_row,
            Benchmark::Ellipsoid => functions::ellipsoid::ellipsoid_row,
            Benchmark::KTablet => functions::k_tablet::k_tablet_row,
            Benchmark::RosenbrockStar => functions::rosenbrock_star::rosenbrock_star_row,
            Benchmark::RosenbrockChain => functions::rosenbrock_chain::rosenbrock_chain_row,
            Benchmark::Bohachevsky => functions::bohachevsky::bohachevsky_row,
            Benchmark::Ackley => functions::ackley::ackley_row,
            Benchmark::Schaffer => functions::schaffer::schaffer_row,
            Benchmark::Rastrigin => functions::rastrigin::rastrigin_row,
        }
    }

    fn check_dimension(&self, got: usize) -> Result<()> {
        let required = self.min_dimension();
        if got < required {
            log::warn!(
                "{} rejected a batch with {} dimensions (needs at least {})",
                self,
                got,
                required
            );
            return Err(BenchmarkError::DimensionTooSmall {
                function: *self,
                required,
                got,
            });
        }
        Ok(())
    }

    /// Evaluate the function on every row of a (n_samples, n_dimensions) batch.
    ///
    /// Fails with [`BenchmarkError::Shape`] when `input` is not 2D and with
    /// [`BenchmarkError::DimensionTooSmall`] when it has fewer columns than
    /// [`min_dimension`](Self::min_dimension). Either way nothing is computed.
    pub fn evaluate<S, D>(&self, input: &ArrayBase<S, D>) -> Result<Array1<f64>>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let batch = check(input).inspect_err(|err| {
            log::warn!("{} rejected its input: {}", self, err);
        })?;
        self.check_dimension(batch.ncols())?;
        log::debug!(
            "evaluating {} on {} samples x {} dimensions",
            self,
            batch.nrows(),
            batch.ncols()
        );
        Ok(functions::map_rows(batch, self.kernel()))
    }

    /// Evaluate the function at a single point.
    pub fn evaluate_point(&self, x: ArrayView1<'_, f64>) -> Result<f64> {
        self.check_dimension(x.len())?;
        Ok((self.kernel())(x))
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Benchmark {
    type Err = BenchmarkError;

    fn from_str(name: &str) -> Result<Self> {
        Benchmark::ALL
            .into_iter()
            .find(|benchmark| benchmark.name() == name)
            .ok_or_else(|| BenchmarkError::UnknownFunction {
                name: name.to_string(),
            })
    }
}
