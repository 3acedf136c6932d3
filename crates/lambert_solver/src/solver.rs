// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Single-problem entry point: wires the preprocessor, feasibility check,
//! initial-guess selector, Householder loop, and velocity reconstructor
//! together.

use lambert_solver_error::{invalid_input, LambertError};

use crate::constants::MAX_REVOLUTIONS;
use crate::feasibility::compute_feasibility;
use crate::geometry::build_geometry;
use crate::initial_guess::{initial_guess_m0, initial_guess_m_gt_0};
use crate::rootfinders::householder;
use crate::types::{LambertConfig, LambertInput, LambertSolution};
use crate::velocity::reconstruct;

/// Solve a single Lambert boundary-value problem.
///
/// Fails immediately on invalid input (`T <= 0`, `mu <= 0`, `M` outside
/// `[0, 10]`), after the preprocessor on a degenerate transfer geometry, or
/// when `M` exceeds the maximum revolution count the time of flight can
/// support. Non-convergence of the Householder loop is not an error: it is
/// reported via `LambertSolution::converged`.
pub fn lambert(input: &LambertInput, config: LambertConfig) -> Result<LambertSolution, LambertError> {
    validate_input(input)?;

    let geometry = build_geometry(input)?;
    let feasibility = compute_feasibility(geometry.big_t, geometry.lambda, input.m, &config);

    if input.m > feasibility.m_max {
        return Err(LambertError::NoSolutionForRevolutionCount {
            requested: input.m,
            m_max: feasibility.m_max,
        });
    }

    let x0 = if input.m == 0 {
        initial_guess_m0(geometry.big_t, feasibility.t00, feasibility.t1, geometry.lambda)
    } else {
        initial_guess_m_gt_0(geometry.big_t, input.m, input.low_path)
    };

    let (x, iterations, converged) =
        householder(x0, geometry.big_t, geometry.lambda, input.m, &config);

    if !converged {
        log::warn!(
            "lambert: Householder loop did not converge within {} iterations (M={}, T={})",
            config.max_iter,
            input.m,
            geometry.big_t
        );
    }

    let (v1, v2) = reconstruct(x, geometry.lambda, &geometry, input.mu);

    Ok(LambertSolution {
        v1,
        v2,
        iterations,
        converged,
    })
}

fn validate_input(input: &LambertInput) -> Result<(), LambertError> {
    if !(input.mu > 0.0) {
        return Err(invalid_input!("mu must be positive, got {}", input.mu));
    }
    if !(input.t_sec > 0.0) {
        return Err(invalid_input!("t_sec must be positive, got {}", input.t_sec));
    }
    if input.m > MAX_REVOLUTIONS {
        return Err(invalid_input!(
            "M must be in [0, {MAX_REVOLUTIONS}], got {}",
            input.m
        ));
    }
    Ok(())
}
