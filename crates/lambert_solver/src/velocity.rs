// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Gooding's closed-form mapping from a converged `x` back to inertial-frame
//! velocities.

use nalgebra::Vector3;

use crate::types::Geometry;

/// Reconstruct `(v1, v2)` from the converged `x` and the geometry built by
/// [`crate::geometry::build_geometry`].
pub fn reconstruct(x: f64, lambda: f64, geometry: &Geometry, mu: f64) -> (Vector3<f64>, Vector3<f64>) {
    let y = (1.0 - lambda * lambda * (1.0 - x * x)).sqrt();

    let gamma = (mu * geometry.s / 2.0).sqrt();
    let rho = (geometry.r1_mag - geometry.r2_mag) / geometry.c;
    let sigma = (1.0 - rho * rho).sqrt();

    let lambda_y = lambda * y;

    let v_r1 = gamma * ((lambda_y - x) - rho * (lambda_y + x)) / geometry.r1_mag;
    let v_r2 = -gamma * ((lambda_y - x) + rho * (lambda_y + x)) / geometry.r2_mag;

    let v_t1 = gamma * sigma * (y + lambda * x) / geometry.r1_mag;
    let v_t2 = gamma * sigma * (y + lambda * x) / geometry.r2_mag;

    let v1 = geometry.r1_hat * v_r1 + geometry.t1_hat * v_t1;
    let v2 = geometry.r2_hat * v_r2 + geometry.t2_hat * v_t2;

    (v1, v2)
}
