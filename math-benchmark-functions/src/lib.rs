#![doc = include_str!("../README.md")]

use ndarray::{Array1, ArrayBase, Data, Dimension};
use std::collections::{BTreeMap, HashMap};

pub mod benchmark;
pub mod error;
pub mod functions;
pub mod validate;

pub use benchmark::{Benchmark, Optimum, SearchArea};
pub use error::{BenchmarkError, Result};
pub use functions::*;
pub use validate::{batch_from_rows, check};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Metadata for a benchmark function
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Search area, identical for every axis
    pub search_area: SearchArea,
    /// Location of the global minimum
    pub optimum: Optimum,
    /// Function value at the global minimum
    pub optimum_value: f64,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Smallest supported dimensionality
    pub min_dimension: usize,
}

impl Benchmark {
    /// Collect the metadata of this function
    pub fn metadata(&self) -> FunctionMetadata {
        FunctionMetadata {
            name: self.name().to_string(),
            search_area: self.search_area(),
            optimum: self.optimum(),
            optimum_value: 0.0,
            description: self.description().to_string(),
            multimodal: self.is_multimodal(),
            min_dimension: self.min_dimension(),
        }
    }
}

/// Evaluate the benchmark function registered under `function_name` on every
/// row of `input`.
///
/// ```
/// use math_benchmark_functions::evaluate;
/// use ndarray::array;
///
/// let out = evaluate("sphere", &array![[0.0, 0.0], [1.0, 1.0]]).unwrap();
/// assert_eq!(out, array![0.0, 2.0]);
/// assert!(evaluate("sphere", &array![1.0, 1.0]).unwrap_err().is_shape_error());
/// ```
pub fn evaluate<S, D>(function_name: &str, input: &ArrayBase<S, D>) -> Result<Array1<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let benchmark = function_name.parse::<Benchmark>().inspect_err(|err| {
        log::warn!("{}", err);
    })?;
    benchmark.evaluate(input)
}

/// Search area of every function, keyed by name
pub fn search_area() -> BTreeMap<&'static str, SearchArea> {
    Benchmark::ALL
        .into_iter()
        .map(|benchmark| (benchmark.name(), benchmark.search_area()))
        .collect()
}

/// Optimal solution of every function in `dimension` dimensions, keyed by name
pub fn optimal_solution(dimension: usize) -> BTreeMap<&'static str, Array1<f64>> {
    Benchmark::ALL
        .into_iter()
        .map(|benchmark| (benchmark.name(), benchmark.optimal_solution(dimension)))
        .collect()
}

/// Get metadata for all benchmark functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    let metadata: HashMap<String, FunctionMetadata> = Benchmark::ALL
        .into_iter()
        .map(|benchmark| (benchmark.name().to_string(), benchmark.metadata()))
        .collect();
    log::debug!("loaded metadata for {} benchmark functions", metadata.len());
    metadata
}

/// Helper function to get bounds for a specific function in `dimension` dimensions
/// Returns None if function is not found
pub fn get_function_bounds(function_name: &str, dimension: usize) -> Option<Vec<(f64, f64)>> {
    function_name
        .parse::<Benchmark>()
        .ok()
        .map(|benchmark| benchmark.search_area().bounds(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, Axis, array};

    /// Evaluate a function by name through its named entry point
    fn call_function(name: &str, x: &Array2<f64>) -> Option<Result<Array1<f64>>> {
        match name {
            "sphere" => Some(sphere(x)),
            "ellipsoid" => Some(ellipsoid(x)),
            "k_tablet" => Some(k_tablet(x)),
            "rosenbrock_star" => Some(rosenbrock_star(x)),
            "rosenbrock_chain" => Some(rosenbrock_chain(x)),
            "bohachevsky" => Some(bohachevsky(x)),
            "ackley" => Some(ackley(x)),
            "schaffer" => Some(schaffer(x)),
            "rastrigin" => Some(rastrigin(x)),
            _ => None,
        }
    }

    #[test]
    fn test_all_function_minima() {
        let metadata = get_function_metadata();
        let tolerance = 1e-10;

        for (func_name, meta) in metadata.iter() {
            for dim in meta.min_dimension.max(1)..=16 {
                let x = meta.optimum.point(dim).insert_axis(Axis(0));
                let actual = call_function(func_name, &x)
                    .unwrap_or_else(|| panic!("{} has no entry point", func_name))
                    .unwrap();
                let error = (actual[0] - meta.optimum_value).abs();
                assert!(
                    error <= tolerance,
                    "Function {} failed in {}D: expected {:.10}, got {:.10}, error {:.2e}",
                    func_name,
                    dim,
                    meta.optimum_value,
                    actual[0],
                    error
                );
            }
        }
    }

    #[test]
    fn test_named_functions_match_evaluate() {
        let x = array![[0.5, -1.5, 2.0], [3.0, 0.25, -0.75]];
        for benchmark in Benchmark::ALL {
            let named = call_function(benchmark.name(), &x).unwrap().unwrap();
            let dispatched = evaluate(benchmark.name(), &x).unwrap();
            assert_eq!(named, dispatched, "{} dispatch mismatch", benchmark);
        }
    }

    #[test]
    fn test_evaluate_unknown_function() {
        let err = evaluate("griewank", &array![[0.0, 0.0]]).unwrap_err();
        assert_eq!(
            err,
            BenchmarkError::UnknownFunction {
                name: "griewank".to_string()
            }
        );
    }

    #[test]
    fn test_search_area_table() {
        let areas = search_area();
        assert_eq!(areas.len(), 9);
        assert_eq!(areas["sphere"].as_array(), [-5.12, 5.12]);
        assert_eq!(areas["ellipsoid"].as_array(), [-5.12, 5.12]);
        assert_eq!(areas["k_tablet"].as_array(), [-5.12, 5.12]);
        assert_eq!(areas["rosenbrock_star"].as_array(), [-2.048, 2.048]);
        assert_eq!(areas["rosenbrock_chain"].as_array(), [-2.048, 2.048]);
        assert_eq!(areas["bohachevsky"].as_array(), [-5.12, 5.12]);
        assert_eq!(areas["ackley"].as_array(), [-32.768, 32.768]);
        assert_eq!(areas["schaffer"].as_array(), [-100.0, 100.0]);
        assert_eq!(areas["rastrigin"].as_array(), [-5.12, 5.12]);
        assert_eq!(search_area(), areas);
    }

    #[test]
    fn test_optimal_solution_table() {
        let solutions = optimal_solution(3);
        assert_eq!(solutions.len(), 9);
        for name in ["rosenbrock_star", "rosenbrock_chain", "rastrigin"] {
            assert_eq!(solutions[name], array![1.0, 1.0, 1.0], "{}", name);
        }
        for name in ["sphere", "ellipsoid", "k_tablet", "bohachevsky", "ackley", "schaffer"] {
            assert_eq!(solutions[name], array![0.0, 0.0, 0.0], "{}", name);
        }

        for point in optimal_solution(0).values() {
            assert!(point.is_empty());
        }
    }

    #[test]
    fn test_function_metadata_completeness() {
        let metadata = get_function_metadata();
        assert_eq!(metadata.len(), Benchmark::ALL.len());

        for (name, meta) in metadata.iter() {
            assert_eq!(&meta.name, name);
            assert!(!meta.description.is_empty(), "Function {} has no description", name);
            assert!(
                meta.search_area.low < meta.search_area.high,
                "Function {} has invalid bounds",
                name
            );
            assert_abs_diff_eq!(meta.optimum_value, 0.0);
        }
    }

    #[test]
    fn test_get_function_bounds() {
        assert_eq!(
            get_function_bounds("ackley", 3),
            Some(vec![(-32.768, 32.768); 3])
        );
        assert_eq!(get_function_bounds("ackley", 0), Some(vec![]));
        assert_eq!(get_function_bounds("booth", 2), None);
    }
}
