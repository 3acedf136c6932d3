// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Solves a single well-known LEO transfer, then a small batch of the same
//! problem, and prints both outcomes.

use nalgebra::Vector3;

use lambert_solver::{lambert, lambert_batch, LambertConfig, LambertInput, MU_EARTH};

fn main() {
    let input = LambertInput::new(
        MU_EARTH,
        Vector3::new(15945.34, 0.0, 0.0),
        Vector3::new(12214.83, 10249.47, 0.0),
        4560.0,
    );

    match lambert(&input, LambertConfig::default()) {
        Ok(solution) => {
            println!(
                "v1 = {:?} km/s, v2 = {:?} km/s, {} iterations, converged = {}",
                solution.v1, solution.v2, solution.iterations, solution.converged
            );
        }
        Err(err) => eprintln!("solve failed: {err}"),
    }

    let problems: Vec<f64> = (0..4)
        .flat_map(|_| {
            [
                MU_EARTH, 15945.34, 0.0, 0.0, 12214.83, 10249.47, 0.0, 4560.0,
            ]
        })
        .collect();
    let mut results = vec![0.0; 4 * 6];
    match lambert_batch(&problems, &mut results, 0, LambertConfig::default()) {
        Ok(solved) => println!("batch: {solved}/4 solved"),
        Err(err) => eprintln!("batch failed: {err}"),
    }
}
