// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The two iteration loops built on [`crate::kernel`]: Halley's method on
//! `T'(x)` (used only to bound the feasible revolution count) and a
//! quartic Householder iteration on `T(x) = T*` (the main solve).

use crate::kernel::tof_and_derivatives;
use crate::types::LambertConfig;

/// Find `x` where `T'(x) = 0` for a given `M`, starting at `x = 0`.
///
/// Returns `T` at the final `x`, i.e. the minimum non-dimensional time of
/// flight achievable at that revolution count. Always returns a value —
/// matching the source algorithm, this search does not itself report
/// non-convergence; `crate::feasibility` treats its result as authoritative
/// even in pathological regimes where `M_max` could be off by one.
pub fn halley_min_time(lambda: f64, m: u32, config: &LambertConfig) -> f64 {
    let mut x = 0.0;

    for _ in 0..config.max_iter {
        let k = tof_and_derivatives(x, lambda, m);

        let denom = k.d2t * k.d2t - 0.5 * k.dt * k.d3t;
        if denom.abs() < f64::EPSILON {
            log::warn!("halley_min_time: denominator vanished at x={x}, M={m}");
            break;
        }

        let delta = k.dt * k.d2t / denom;
        x -= delta;

        log::trace!("halley_min_time: x={x}, T'={}, step={delta}", k.dt);

        if k.dt.abs() < config.rtol || delta.abs() < config.rtol {
            break;
        }
    }

    tof_and_derivatives(x, lambda, m).t
}

/// Find `x` solving `T(x) = big_t_star` via the quartic Householder
/// iteration, starting from `x0`.
///
/// Returns `(x, iterations, converged)`. `converged` is `false` when
/// `max_iter` is exhausted without either stop predicate firing; `x` is
/// still the best estimate reached and is left to the caller to accept or
/// reject.
pub fn householder(
    x0: f64,
    big_t_star: f64,
    lambda: f64,
    m: u32,
    config: &LambertConfig,
) -> (f64, u32, bool) {
    let mut x = x0;
    let mut converged = false;
    let mut iterations = 0;

    for i in 0..config.max_iter {
        iterations = i + 1;

        let k = tof_and_derivatives(x, lambda, m);
        let delta = k.t - big_t_star;

        let dt2 = k.dt * k.dt;
        let numerator = dt2 - 0.5 * delta * k.d2t;
        let denominator = k.dt * (dt2 - delta * k.d2t) + delta * delta * k.d3t / 6.0;
        let step = delta * numerator / denominator;

        x -= step;

        log::trace!("householder: iter={iterations}, x={x}, delta={delta}, step={step}");

        if delta.abs() < config.rtol * big_t_star.abs() || step.abs() < config.rtol {
            converged = true;
            break;
        }
    }

    (x, iterations, converged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn householder_converges_on_a_well_posed_elliptic_case() {
        let config = LambertConfig::default();
        let lambda = 0.5;
        let big_t_star = 1.2;
        let (x, iterations, converged) = householder(0.0, big_t_star, lambda, 0, &config);
        assert!(converged);
        assert!(iterations <= config.max_iter);

        let recovered = tof_and_derivatives(x, lambda, 0).t;
        assert!(
            (recovered - big_t_star).abs() < config.rtol * big_t_star,
            "recovered T={recovered} should match target T*={big_t_star}"
        );
    }

    #[test]
    fn halley_min_time_finds_a_stationary_point() {
        let config = LambertConfig::default();
        let lambda = 0.2;
        let m = 1;
        let t_min = halley_min_time(lambda, m, &config);
        // T'(x) should be close to zero at the x the search settles on; we
        // can't recover x directly here, but T_min should be strictly less
        // than T at a handful of nearby sample points for a true minimum.
        let x_star = {
            // Re-run the same search inline to recover x for the probe below.
            let mut x = 0.0;
            for _ in 0..config.max_iter {
                let k = tof_and_derivatives(x, lambda, m);
                let denom = k.d2t * k.d2t - 0.5 * k.dt * k.d3t;
                if denom.abs() < f64::EPSILON {
                    break;
                }
                let delta = k.dt * k.d2t / denom;
                x -= delta;
                if k.dt.abs() < config.rtol || delta.abs() < config.rtol {
                    break;
                }
            }
            x
        };
        for offset in [-0.05, 0.05] {
            let sample = tof_and_derivatives(x_star + offset, lambda, m).t;
            assert!(sample >= t_min - 1e-9);
        }
    }
}
