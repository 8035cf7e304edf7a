// ============================================================================
// Tolerance Comparison
// Approximate equality for floating-point values
// ============================================================================

/// Default relative tolerance for [`nearly_equal`].
pub const DEFAULT_REL_TOL: f64 = 1e-8;

/// Default absolute tolerance floor for [`nearly_equal`].
pub const DEFAULT_ABS_TOL: f64 = 0.0;

/// Compare two values for approximate equality.
///
/// With `rel_tol = None` (the legacy call shape) the comparison is exact.
/// Otherwise two finite values are equal when their absolute difference
/// stays within the larger of `abs_tol` and `rel_tol` times the larger
/// magnitude; differences below machine epsilon always compare equal, which
/// protects comparisons near zero.
///
/// Identical values compare equal up front, covering matching infinities
/// and zero against negative zero. NaN never compares equal; an infinity
/// only matches an infinity of the same sign.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert!(nearly_equal(0.1 + 0.2, 0.3, Some(DEFAULT_REL_TOL), DEFAULT_ABS_TOL));
/// assert!(!nearly_equal(0.1 + 0.2, 0.3, None, 0.0));
/// ```
pub fn nearly_equal(x: f64, y: f64, rel_tol: Option<f64>, abs_tol: f64) -> bool {
    // legacy shape: no tolerance means strict equality
    let Some(rel_tol) = rel_tol else {
        return x == y;
    };

    if x == y {
        return true;
    }
    if x.is_nan() || y.is_nan() {
        return false;
    }

    if x.is_finite() && y.is_finite() {
        let diff = (x - y).abs();
        if diff < f64::EPSILON {
            return true;
        }
        return diff <= f64::max(abs_tol, rel_tol * f64::max(x.abs(), y.abs()));
    }

    // one side infinite, or infinities of opposite sign
    false
}
