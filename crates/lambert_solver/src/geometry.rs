// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Reduces a raw `(r1, r2, T)` problem to the non-dimensional `(lambda, T)`
//! pair and the orthonormal in-plane frame the scalar kernel and velocity
//! reconstructor operate in.

use nalgebra::Vector3;

use lambert_solver_error::LambertError;

use crate::constants::TRANSFER_PLANE_EPSILON;
use crate::types::{Geometry, LambertInput};

/// Build the non-dimensional geometry for a solve.
///
/// Fails with [`LambertError::TransferAngleUndefined`] when `r1` and `r2`
/// are within numerical noise of collinear-and-opposite (~180 degrees
/// apart), since the transfer plane normal is then undefined.
pub fn build_geometry(input: &LambertInput) -> Result<Geometry, LambertError> {
    let r1_mag = input.r1.norm();
    let r2_mag = input.r2.norm();

    let c = (input.r2 - input.r1).norm();
    let s = (r1_mag + r2_mag + c) / 2.0;

    // Clamp guards against c/s landing a hair above 1.0 from roundoff when
    // r1 and r2 are (numerically) collinear and on the same side.
    let mut lambda = (1.0 - c / s).max(0.0).sqrt();

    let r1_hat = input.r1 / r1_mag;
    let r2_hat = input.r2 / r2_mag;

    let h_raw = r1_hat.cross(&r2_hat);
    let h_norm = h_raw.norm();
    if h_norm < TRANSFER_PLANE_EPSILON {
        log::debug!("build_geometry: |r1_hat x r2_hat| = {h_norm:e}, transfer plane undefined");
        return Err(LambertError::TransferAngleUndefined);
    }
    let h_hat = h_raw / h_norm;

    let reference = input.reference_normal.unwrap_or_else(Vector3::z);

    let (mut t1_hat, mut t2_hat) = if h_hat.dot(&reference) < 0.0 {
        lambda = -lambda;
        (r1_hat.cross(&h_hat), r2_hat.cross(&h_hat))
    } else {
        (h_hat.cross(&r1_hat), h_hat.cross(&r2_hat))
    };

    if !input.prograde {
        lambda = -lambda;
        t1_hat = -t1_hat;
        t2_hat = -t2_hat;
    }

    let s3 = s * s * s;
    let big_t = (2.0 * input.mu / s3).sqrt() * input.t_sec;

    log::debug!("build_geometry: lambda={lambda}, s={s}, big_t={big_t}");

    Ok(Geometry {
        r1_mag,
        r2_mag,
        c,
        s,
        lambda,
        r1_hat,
        r2_hat,
        t1_hat,
        t2_hat,
        h_hat,
        big_t,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_approx_equal;

    #[test]
    fn quarter_circle_has_lambda_near_sqrt_half() {
        let input = LambertInput::new(
            1.0,
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            1.0,
        );
        let geometry = build_geometry(&input).unwrap();
        // c = sqrt(2), s = 1 + sqrt(2)/2, lambda = sqrt(1 - c/s).
        let expected_lambda = (1.0 - geometry.c / geometry.s).sqrt();
        assert_approx_equal!(geometry.lambda, expected_lambda, 1e-12);
        assert!(geometry.lambda > 0.0);
    }

    #[test]
    fn antipodal_positions_fail() {
        let input = LambertInput::new(
            398_600.4418,
            Vector3::new(7000.0, 0.0, 0.0),
            Vector3::new(-7000.0, 0.0, 0.0),
            3600.0,
        );
        assert_eq!(
            build_geometry(&input).unwrap_err(),
            LambertError::TransferAngleUndefined
        );
    }

    #[test]
    fn retrograde_flips_lambda_sign_relative_to_prograde() {
        let mut input = LambertInput::new(
            398_600.4418,
            Vector3::new(15945.34, 0.0, 0.0),
            Vector3::new(12214.83, 10249.47, 0.0),
            4560.0,
        );
        let prograde = build_geometry(&input).unwrap();
        input.prograde = false;
        let retrograde = build_geometry(&input).unwrap();
        assert_approx_equal!(prograde.lambda, -retrograde.lambda, 1e-12);
    }
}
