// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Enumerates every feasible `(M, low/high path)` combination for a single
//! `(r1, r2, T)` geometry, up to a caller-supplied maximum revolution count.

use crate::solver::lambert;
use crate::types::{LambertConfig, LambertInput, MultiRevInput, MultiRevSolution};

/// Solve `input` once per feasible `(M, path)` combination, `M` from `0` up
/// to `input.max_m` inclusive.
///
/// `M = 0` has no low/high distinction and is attempted once. Each `M > 0`
/// is attempted twice, low-path and high-path, except that the high-path
/// branch is never meaningfully distinct from the low path when `M == 0`,
/// so that redundant combination is skipped rather than solved twice.
/// Combinations that fail (infeasible `M`, non-convergence folded into
/// `converged: false`, or a geometry error) are simply omitted from the
/// returned vector — there is no in-band failure marker here the way the
/// flat-buffer batch driver needs one, since each entry already carries its
/// own `m`/`low_path` tag.
pub fn lambert_multi_rev(input: &MultiRevInput, config: LambertConfig) -> Vec<MultiRevSolution> {
    let mut solutions = Vec::new();

    for m in 0..=input.max_m {
        if m == 0 {
            if let Some(solution) = solve_one(input, m, true, config) {
                solutions.push(MultiRevSolution {
                    m,
                    low_path: None,
                    v1: solution.v1,
                    v2: solution.v2,
                    iterations: solution.iterations,
                    converged: solution.converged,
                });
            }
            continue;
        }

        for &low_path in &[true, false] {
            if let Some(solution) = solve_one(input, m, low_path, config) {
                solutions.push(MultiRevSolution {
                    m,
                    low_path: Some(low_path),
                    v1: solution.v1,
                    v2: solution.v2,
                    iterations: solution.iterations,
                    converged: solution.converged,
                });
            }
        }
    }

    solutions
}

fn solve_one(
    input: &MultiRevInput,
    m: u32,
    low_path: bool,
    config: LambertConfig,
) -> Option<crate::types::LambertSolution> {
    let single = LambertInput {
        mu: input.mu,
        r1: input.r1,
        r2: input.r2,
        t_sec: input.t_sec,
        m,
        prograde: input.prograde,
        low_path,
        reference_normal: input.reference_normal,
    };

    match lambert(&single, config) {
        Ok(solution) => Some(solution),
        Err(err) => {
            log::debug!("lambert_multi_rev: M={m}, low_path={low_path} skipped: {err}");
            None
        }
    }
}
