// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! The non-dimensional time-of-flight function `T(x; lambda, M)` and its
//! first three derivatives. This is the function both root-finders drive to
//! zero (well, to `T(x) = T*` and `T'(x) = 0` respectively) and is evaluated
//! many times per solve, so the elliptic/hyperbolic branch and the
//! near-parabolic Battin branch are both kept allocation-free and free of
//! `powi`/`powf` on the `lambda` chain.

use std::f64::consts::PI;

use crate::constants::BATTIN_THRESHOLD;

/// `T(x)` and its first three derivatives at a single trial `x`.
#[derive(Debug, Clone, Copy)]
pub struct TofDerivatives {
    /// `T(x)`.
    pub t: f64,
    /// `T'(x)`.
    pub dt: f64,
    /// `T''(x)`.
    pub d2t: f64,
    /// `T'''(x)`.
    pub d3t: f64,
}

/// Evaluate `T(x; lambda, M)` and its first three derivatives.
///
/// `x < 1` is the elliptic branch, `x > 1` hyperbolic; within
/// [`BATTIN_THRESHOLD`] of `x = 1` the general form's `1 - x^2` denominator
/// cancels catastrophically and the Battin hypergeometric series is used
/// instead.
pub fn tof_and_derivatives(x: f64, lambda: f64, m: u32) -> TofDerivatives {
    let x2 = x * x;
    let lambda2 = lambda * lambda;
    let lambda3 = lambda2 * lambda;
    let lambda5 = lambda3 * lambda2;

    let y = (1.0 - lambda2 * (1.0 - x2)).sqrt();
    let one_minus_x2 = 1.0 - x2;

    let t = if (x - 1.0).abs() < BATTIN_THRESHOLD {
        battin_tof(x, y, lambda, m)
    } else {
        general_tof(x, y, lambda, one_minus_x2, m)
    };

    let y3 = y * y * y;
    let y5 = y3 * y * y;

    let dt = (3.0 * t * x - 2.0 + 2.0 * lambda3 * x / y) / one_minus_x2;
    let d2t = (3.0 * t + 5.0 * x * dt + 2.0 * (1.0 - lambda2) * lambda3 / y3) / one_minus_x2;
    let d3t = (7.0 * x * d2t + 8.0 * dt - 6.0 * (1.0 - lambda2) * lambda5 * x / y5) / one_minus_x2;

    TofDerivatives { t, dt, d2t, d3t }
}

/// General elliptic/hyperbolic form, valid away from `x = 1`.
///
/// `x^2 - 1 = -(1 - x^2)`, so both branches' inverse-trig argument is the
/// same `x*y + lambda*(1 - x^2)`; only the function (`acos` vs `acosh`)
/// differs between the elliptic and hyperbolic sides.
fn general_tof(x: f64, y: f64, lambda: f64, one_minus_x2: f64, m: u32) -> f64 {
    let arg = x * y + lambda * one_minus_x2;
    let psi = if x < 1.0 { arg.acos() } else { arg.acosh() };

    ((psi + m as f64 * PI) / one_minus_x2.abs().sqrt() - x + lambda * y) / one_minus_x2
}

/// Battin's hypergeometric form, valid near `x = 1` (elliptic, parabolic,
/// and hyperbolic alike).
fn battin_tof(x: f64, y: f64, lambda: f64, m: u32) -> f64 {
    let eta = y - lambda * x;
    let s1 = 0.5 * (1.0 - lambda - x * eta);
    let q = (4.0 / 3.0) * hypergeometric_2f1_3_1_5_2(s1);

    let eta3 = eta * eta * eta;
    0.5 * (eta3 * q + 4.0 * lambda * eta) + (m as f64) * PI / (1.0 - x * x).abs().powf(1.5)
}

/// `_2F_1(3, 1, 5/2; z)`, accumulated via the Pochhammer ratio until the
/// incremental term falls below `1e-15` or 25 terms have been summed.
/// `z` is always in `(-inf, 1)` within the valid domain.
fn hypergeometric_2f1_3_1_5_2(z: f64) -> f64 {
    const A: f64 = 3.0;
    const B: f64 = 1.0;
    const C: f64 = 2.5;
    const MAX_TERMS: u32 = 25;
    const TERM_TOLERANCE: f64 = 1e-15;

    let mut term = 1.0;
    let mut sum = 1.0;

    for n in 0..MAX_TERMS {
        let n = n as f64;
        term *= (A + n) * (B + n) / ((C + n) * (n + 1.0)) * z;
        if term.abs() < TERM_TOLERANCE {
            break;
        }
        sum += term;
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_approx_equal;

    #[test]
    fn general_and_battin_branches_agree_near_boundary() {
        // Straddle x=1 just inside and just outside BATTIN_THRESHOLD and
        // check continuity of T, not exact branch agreement (the branches
        // are only required to be close near the boundary, not identical).
        let lambda = 0.3;
        let just_inside = tof_and_derivatives(1.0 - BATTIN_THRESHOLD * 0.999, lambda, 0);
        let just_past = tof_and_derivatives(1.0 - BATTIN_THRESHOLD * 1.2, lambda, 0);
        assert_approx_equal!(just_inside.t, just_past.t, 1e-3);
    }

    #[test]
    fn zero_lambda_parabolic_time_matches_known_value() {
        // T(1; 0, 0) = 2/3 exactly (the x=1 parabolic value from feasibility).
        let k = tof_and_derivatives(1.0 - 1e-9, 0.0, 0);
        assert_approx_equal!(k.t, 2.0 / 3.0, 1e-5);
    }

    #[test]
    fn hypergeometric_series_matches_taylor_for_small_z() {
        // 2F1(3,1,5/2; z) = 1 + (6/5)z + O(z^2) for small z.
        let z = 1e-4;
        let value = hypergeometric_2f1_3_1_5_2(z);
        let taylor = 1.0 + 1.2 * z;
        assert_approx_equal!(value, taylor, 1e-7);
    }
}
