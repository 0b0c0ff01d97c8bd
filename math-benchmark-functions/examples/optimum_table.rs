//! Print every benchmark function with its search area and the value it
//! takes at its optimal solution and at a random point of the search area.

use math_benchmark_functions::{Benchmark, get_function_metadata};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> math_benchmark_functions::Result<()> {
    env_logger::init();

    let dimension = 10;
    let metadata = get_function_metadata();
    let mut rng = StdRng::seed_from_u64(42);

    println!(
        "{:<18} {:>20} {:>14} {:>14}  {}",
        "function", "search area", "f(optimum)", "f(random)", "property"
    );
    println!("{}", "=".repeat(100));

    for benchmark in Benchmark::ALL {
        let meta = &metadata[benchmark.name()];
        let optimum = benchmark
            .optimal_solution(dimension)
            .insert_axis(ndarray::Axis(0));
        let random = meta.search_area.sample(1, dimension, &mut rng);

        let at_optimum = benchmark.evaluate(&optimum)?;
        let at_random = benchmark.evaluate(&random)?;

        println!(
            "{:<18} {:>20} {:>14.3e} {:>14.3e}  {}",
            meta.name,
            format!("[{}, {}]", meta.search_area.low, meta.search_area.high),
            at_optimum[0],
            at_random[0],
            meta.description
        );
    }

    Ok(())
}
