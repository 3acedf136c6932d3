// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Flat-buffer batch driver for porkchop-style sweeps, where allocating a
//! `LambertInput`/`LambertSolution` per problem would dominate the cost of
//! solving it.

use nalgebra::Vector3;

use lambert_solver_error::{invalid_input, LambertError};

use crate::solver::lambert;
use crate::types::{LambertConfig, LambertInput};

/// Input stride: `mu, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z, t_sec`.
pub const INPUT_STRIDE: usize = 8;

/// Output stride: `v1.x, v1.y, v1.z, v2.x, v2.y, v2.z`.
pub const OUTPUT_STRIDE: usize = 6;

/// Solve every problem packed into `problems` (stride [`INPUT_STRIDE`]),
/// writing `v1`/`v2` into `results` (stride [`OUTPUT_STRIDE`]) at the
/// matching index, all at revolution count `m` with prograde motion and the
/// default reference pole.
///
/// A failed solve — invalid input, undefined transfer plane, or `m`
/// exceeding the feasible count for that problem — writes `f64::NAN` into
/// all six of that problem's output slots rather than leaving them
/// untouched or aborting the batch, so a caller scanning the output buffer
/// never mistakes a skipped slot for a converged zero-velocity solution.
/// Returns the count of problems that solved successfully.
pub fn lambert_batch(
    problems: &[f64],
    results: &mut [f64],
    m: u32,
    config: LambertConfig,
) -> Result<usize, LambertError> {
    if problems.len() % INPUT_STRIDE != 0 {
        return Err(invalid_input!(
            "problems buffer length {} is not a multiple of stride {INPUT_STRIDE}",
            problems.len()
        ));
    }
    let count = problems.len() / INPUT_STRIDE;
    if results.len() != count * OUTPUT_STRIDE {
        return Err(invalid_input!(
            "results buffer length {} does not match {count} problems at stride {OUTPUT_STRIDE}",
            results.len()
        ));
    }

    let mut solved = 0;

    for i in 0..count {
        let base_in = i * INPUT_STRIDE;
        let base_out = i * OUTPUT_STRIDE;

        let input = LambertInput {
            mu: problems[base_in],
            r1: Vector3::new(problems[base_in + 1], problems[base_in + 2], problems[base_in + 3]),
            r2: Vector3::new(problems[base_in + 4], problems[base_in + 5], problems[base_in + 6]),
            t_sec: problems[base_in + 7],
            m,
            prograde: true,
            low_path: true,
            reference_normal: None,
        };

        match lambert(&input, config) {
            Ok(solution) => {
                results[base_out] = solution.v1.x;
                results[base_out + 1] = solution.v1.y;
                results[base_out + 2] = solution.v1.z;
                results[base_out + 3] = solution.v2.x;
                results[base_out + 4] = solution.v2.y;
                results[base_out + 5] = solution.v2.z;
                solved += 1;
            }
            Err(err) => {
                log::debug!("lambert_batch: problem {i} failed: {err}");
                for slot in &mut results[base_out..base_out + OUTPUT_STRIDE] {
                    *slot = f64::NAN;
                }
            }
        }
    }

    Ok(solved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MU_EARTH;

    #[test]
    fn batch_solves_a_mix_of_valid_and_invalid_problems() {
        let problems = [
            // Problem 0: valid LEO transfer.
            MU_EARTH, 15945.34, 0.0, 0.0, 12214.83, 10249.47, 0.0, 4560.0,
            // Problem 1: antipodal, transfer plane undefined.
            MU_EARTH, 7000.0, 0.0, 0.0, -7000.0, 0.0, 0.0, 3600.0,
            // Problem 2: invalid time of flight.
            MU_EARTH, 7000.0, 0.0, 0.0, 0.0, 7000.0, 0.0, -1.0,
        ];
        let mut results = [0.0; 3 * OUTPUT_STRIDE];

        let solved = lambert_batch(&problems, &mut results, 0, LambertConfig::default()).unwrap();
        assert_eq!(solved, 1);

        assert!(results[0..OUTPUT_STRIDE].iter().all(|v| v.is_finite()));
        assert!(results[OUTPUT_STRIDE..2 * OUTPUT_STRIDE].iter().all(|v| v.is_nan()));
        assert!(results[2 * OUTPUT_STRIDE..3 * OUTPUT_STRIDE].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn mismatched_buffer_lengths_are_rejected() {
        let problems = [MU_EARTH, 7000.0, 0.0, 0.0, 0.0, 7000.0, 0.0, 3600.0];
        let mut results = [0.0; OUTPUT_STRIDE - 1];
        assert!(matches!(
            lambert_batch(&problems, &mut results, 0, LambertConfig::default()),
            Err(LambertError::InvalidInput(_))
        ));
    }

    #[test]
    fn misaligned_input_buffer_is_rejected() {
        let problems = [MU_EARTH, 7000.0, 0.0, 0.0, 0.0, 7000.0, 0.0];
        let mut results = [0.0; OUTPUT_STRIDE];
        assert!(matches!(
            lambert_batch(&problems, &mut results, 0, LambertConfig::default()),
            Err(LambertError::InvalidInput(_))
        ));
    }

    /// Throughput scenario from the testable-properties table: 500 copies
    /// of a well-posed problem complete well under a second, informally
    /// checked with a wall-clock timer in the teacher's style rather than a
    /// dedicated benchmark harness.
    #[test]
    fn five_hundred_problem_batch_completes_quickly() {
        let mut problems = Vec::with_capacity(500 * INPUT_STRIDE);
        for _ in 0..500 {
            problems.extend_from_slice(&[
                MU_EARTH, 15945.34, 0.0, 0.0, 12214.83, 10249.47, 0.0, 4560.0,
            ]);
        }
        let mut results = vec![0.0; 500 * OUTPUT_STRIDE];

        let start = std::time::Instant::now();
        let solved = lambert_batch(&problems, &mut results, 0, LambertConfig::default()).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(solved, 500);
        assert!(elapsed.as_secs() < 1, "batch of 500 took {elapsed:?}");
    }
}
