// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// lambert-solver: Izzo's method for Lambert's problem.
// Dual licensed under Apache 2.0 and MIT.
// See:
//      - LICENSE-APACHE.md
//      - LICENSE-MIT.md
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

//! Shared float-comparison helper for unit and integration tests. Test-only:
//! never compiled into the published crate.

/// Default absolute tolerance for [`assert_approx_equal`] when none is given.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-8;

/// Asserts `$a` and `$b` differ by no more than `$tol` (default [`EPSILON`]).
#[macro_export]
macro_rules! assert_approx_equal {
    ($a:expr, $b:expr, $tol:expr) => {{
        let (a, b, tol) = (&$a, &$b, &$tol);
        assert!(
            (*a - *b).abs() <= *tol,
            "assertion failed: `(left ~= right)`\n  left: `{:?}`\n right: `{:?}`\n  (tolerance: `{:?}`, diff: `{:?}`)",
            a,
            b,
            tol,
            (*a - *b).abs()
        );
    }};
    ($a:expr, $b:expr) => {
        $crate::assert_approx_equal!($a, $b, $crate::test_support::EPSILON)
    };
}

pub use assert_approx_equal;
