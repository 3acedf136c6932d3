// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Public data types: solver inputs, configuration, and outputs.

use nalgebra::Vector3;

use crate::constants::{DEFAULT_MAX_ITER, DEFAULT_RTOL};

/// A single Lambert boundary-value problem.
#[derive(Debug, Clone, Copy)]
pub struct LambertInput {
    /// Gravitational parameter of the central body (km³/s²).
    pub mu: f64,

    /// Departure position (km).
    pub r1: Vector3<f64>,

    /// Arrival position (km).
    pub r2: Vector3<f64>,

    /// Time of flight (s).
    pub t_sec: f64,

    /// Number of complete revolutions the transfer includes.
    pub m: u32,

    /// `true` for the prograde (natural, counter-clockwise about `+z` unless
    /// `reference_normal` says otherwise) sense of motion.
    pub prograde: bool,

    /// Selects the low-energy branch when `m > 0`; ignored when `m == 0`.
    pub low_path: bool,

    /// Reference pole used to decide the orientation branch of the transfer
    /// plane (see the geometry preprocessor). Defaults to `+z` when `None`.
    pub reference_normal: Option<Vector3<f64>>,
}

impl LambertInput {
    /// A single-revolution, prograde problem with the default `+z` reference
    /// pole. Use struct-update syntax to set `m`, `low_path`, etc.
    pub fn new(mu: f64, r1: Vector3<f64>, r2: Vector3<f64>, t_sec: f64) -> Self {
        Self {
            mu,
            r1,
            r2,
            t_sec,
            m: 0,
            prograde: true,
            low_path: true,
            reference_normal: None,
        }
    }
}

/// Iteration limits and convergence tolerance shared by both root-finders.
#[derive(Debug, Clone, Copy)]
pub struct LambertConfig {
    /// Maximum number of iterations for the Householder and Halley loops.
    pub max_iter: u32,

    /// Relative convergence tolerance.
    pub rtol: f64,
}

impl Default for LambertConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            rtol: DEFAULT_RTOL,
        }
    }
}

/// Result of a single Lambert solve.
#[derive(Debug, Clone, Copy)]
pub struct LambertSolution {
    /// Departure velocity (km/s).
    pub v1: Vector3<f64>,

    /// Arrival velocity (km/s).
    pub v2: Vector3<f64>,

    /// Number of Householder iterations taken.
    pub iterations: u32,

    /// `false` if the Householder loop exhausted `max_iter` without meeting
    /// either stop predicate; `v1`/`v2` are still the best-effort estimate
    /// at the final `x`.
    pub converged: bool,
}

/// Non-dimensional geometry derived from a [`LambertInput`] by the
/// preprocessor. Exposed for callers that want to inspect the transfer
/// plane or feasibility bounds without re-deriving them.
#[derive(Debug, Clone, Copy)]
pub struct Geometry {
    /// `|r1|`.
    pub r1_mag: f64,
    /// `|r2|`.
    pub r2_mag: f64,
    /// Chord length `|r2 - r1|`.
    pub c: f64,
    /// Semi-perimeter `(r1_mag + r2_mag + c) / 2`.
    pub s: f64,
    /// Signed geometry parameter, `sqrt(1 - c/s)` with orientation/retrograde
    /// sign flips applied.
    pub lambda: f64,
    /// `r1 / r1_mag`.
    pub r1_hat: Vector3<f64>,
    /// `r2 / r2_mag`.
    pub r2_hat: Vector3<f64>,
    /// In-plane tangential direction at r1, in the direction of motion.
    pub t1_hat: Vector3<f64>,
    /// In-plane tangential direction at r2, in the direction of motion.
    pub t2_hat: Vector3<f64>,
    /// Transfer plane normal, `(r1_hat x r2_hat) / |r1_hat x r2_hat|`.
    pub h_hat: Vector3<f64>,
    /// Non-dimensional time of flight, `sqrt(2*mu/s^3) * t_sec`.
    pub big_t: f64,
}

/// Input to the multi-revolution enumerator: a geometry/time-of-flight pair
/// solved across every feasible `(M, low/high)` combination up to `max_m`.
#[derive(Debug, Clone, Copy)]
pub struct MultiRevInput {
    /// Gravitational parameter of the central body (km³/s²).
    pub mu: f64,
    /// Departure position (km).
    pub r1: Vector3<f64>,
    /// Arrival position (km).
    pub r2: Vector3<f64>,
    /// Time of flight (s).
    pub t_sec: f64,
    /// Largest revolution count to attempt.
    pub max_m: u32,
    /// `true` for the prograde sense of motion.
    pub prograde: bool,
    /// Reference pole for the orientation branch; defaults to `+z`.
    pub reference_normal: Option<Vector3<f64>>,
}

/// One entry of a [`crate::lambert_multi_rev`] enumeration.
#[derive(Debug, Clone, Copy)]
pub struct MultiRevSolution {
    /// Revolution count of this entry.
    pub m: u32,
    /// `None` when `m == 0` (the low/high distinction is meaningless there);
    /// otherwise `Some(true)` for the low-energy branch.
    pub low_path: Option<bool>,
    /// Departure velocity (km/s).
    pub v1: Vector3<f64>,
    /// Arrival velocity (km/s).
    pub v2: Vector3<f64>,
    /// Number of Householder iterations taken.
    pub iterations: u32,
    /// Whether the Householder loop converged.
    pub converged: bool,
}
