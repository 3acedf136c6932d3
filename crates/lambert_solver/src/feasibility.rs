// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Bounds the revolution count a given time of flight can support.

use std::f64::consts::PI;

use crate::rootfinders::halley_min_time;
use crate::types::LambertConfig;

/// Feasibility bounds for a single `(lambda, T)` geometry.
#[derive(Debug, Clone, Copy)]
pub struct Feasibility {
    /// `T(x=0; lambda, M=0)`, the parabolic-at-zero reference time.
    pub t00: f64,
    /// `T(x=1; lambda, M=0)`, the time at the parabolic boundary.
    pub t1: f64,
    /// Maximum revolution count this `(lambda, T)` pair can support.
    pub m_max: u32,
}

/// Compute `t00`, `t1`, and (only when `requested_m > 0`) refine `M_max` by
/// probing the Halley minimum-time search at the floor estimate.
///
/// `M = 0` is always feasible for any `T > 0` (the elliptic/hyperbolic
/// continuum covers the whole range), so the Halley probe — and its cost —
/// is skipped unless the caller actually asked for revolutions.
pub fn compute_feasibility(
    big_t: f64,
    lambda: f64,
    requested_m: u32,
    config: &LambertConfig,
) -> Feasibility {
    let t00 = lambda.acos() + lambda * (1.0 - lambda * lambda).sqrt();
    let lambda3 = lambda * lambda * lambda;
    let t1 = (2.0 / 3.0) * (1.0 - lambda3);

    let mut m_max = (big_t / PI).floor().max(0.0) as u32;

    if requested_m > 0 {
        while m_max > 0 && big_t < t00 + (m_max as f64) * PI {
            let t_min = halley_min_time(lambda, m_max, config);
            if big_t < t_min {
                log::debug!("compute_feasibility: M_max {m_max} infeasible (T={big_t}, T_min={t_min}), decrementing");
                m_max -= 1;
            } else {
                break;
            }
        }
    }

    Feasibility { t00, t1, m_max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn m_max_zero_lambda_long_tof_is_several_revolutions() {
        let config = LambertConfig::default();
        // A generous non-dimensional TOF should support several revolutions.
        let feasibility = compute_feasibility(25.0, 0.0, 3, &config);
        assert!(feasibility.m_max >= 3);
    }

    #[test]
    fn m_max_is_zero_for_short_tof() {
        let config = LambertConfig::default();
        let feasibility = compute_feasibility(0.5, 0.3, 1, &config);
        assert_eq!(feasibility.m_max, 0);
    }

    /// Exercises the Halley-probe decrement branch itself (not just its
    /// absence): `lambda`/`big_t` below come from the `r1=(7000,0,0)`,
    /// `r2=(0,7000,0)`, `mu=MU_EARTH`, `t_sec=5000` geometry, for which the
    /// naive `floor(T/pi)` candidate is 1 but the true minimum non-dimensional
    /// time of flight for one revolution exceeds `big_t`, so the probe must
    /// decrement `M_max` to 0.
    #[test]
    fn halley_probe_refines_m_max_below_the_naive_floor_estimate() {
        let config = LambertConfig::default();
        let lambda = 0.4142135623730949;
        let big_t = 3.4175572520952797;

        let naive_m_max = (big_t / PI).floor() as u32;
        assert_eq!(naive_m_max, 1, "fixture should exercise the M_max=1 candidate");

        let feasibility = compute_feasibility(big_t, lambda, 1, &config);
        assert!(
            feasibility.m_max < naive_m_max,
            "Halley probe should have decremented M_max below the naive floor(T/pi) estimate"
        );
        assert_eq!(feasibility.m_max, 0);
    }
}
