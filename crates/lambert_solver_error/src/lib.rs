// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Error type for `lambert_solver`.
//!
//! Kept in its own crate so that a caller depending only on the error type
//! (for example a porkchop-grid driver that wants to match on failure modes
//! without pulling in the solver itself) does not need the full dependency
//! tree.

use thiserror::Error;

/// Error type for `lambert_solver`.
///
/// Only the conditions that cannot be resolved locally are represented here.
/// Non-convergence of the Householder iteration is deliberately **not** a
/// variant: it is a soft, in-band signal (`LambertSolution::converged`), not
/// a propagated error, so that batch and porkchop-grid callers can keep
/// iterating past an isolated hard case without paying exception-handling
/// cost on the hot path.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LambertError {
    /// `T <= 0`, `mu <= 0`, or `M` outside `[0, 10]`.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `|r1_hat x r2_hat|` fell below the degeneracy threshold: the transfer
    /// angle is within numerical noise of 180 degrees and the transfer plane
    /// cannot be determined from the two position vectors alone.
    #[error("transfer plane undefined (transfer angle is within numerical noise of 180 degrees)")]
    TransferAngleUndefined,

    /// The requested revolution count exceeds the maximum the time of flight
    /// can support.
    #[error("no solution for M={requested} (maximum feasible revolution count is {m_max})")]
    NoSolutionForRevolutionCount {
        /// Revolution count the caller asked for.
        requested: u32,
        /// Maximum revolution count the time of flight can support.
        m_max: u32,
    },
}

/// Create a [`LambertError::InvalidInput`] with a formatted message.
///
/// ```ignore
/// return Err(invalid_input!("mu must be positive, got {mu}"));
/// ```
#[macro_export]
macro_rules! invalid_input {
    ($($arg:tt)*) => {
        $crate::LambertError::InvalidInput(format!($($arg)*))
    };
}
