// ============================================================================
// General-Precision Notation
// Fixed or exponential, selected by exponent bounds
// ============================================================================

use super::{non_finite_token, push_digits, to_exponential};
use crate::split::{round_digits, split_finite};

/// Render a value with `precision` significant digits, in fixed-point style
/// when the (rounded) exponent lies inside `[lower_exp, upper_exp)` and in
/// exponential notation otherwise.
///
/// `lower_exp` is inclusive, `upper_exp` exclusive: an exponent equal to
/// `lower_exp` still renders fixed, one equal to `upper_exp` switches to
/// exponential.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(to_precision(0.01, None, -2, 5), "0.01");
/// assert_eq!(to_precision(0.001, None, -2, 5), "1e-3");
/// ```
pub fn to_precision(value: f64, precision: Option<u32>, lower_exp: i64, upper_exp: i64) -> String {
    if let Some(token) = non_finite_token(value) {
        return token.to_string();
    }

    let split = split_finite(value);
    let rounded = match precision {
        Some(p) => round_digits(&split, p as i64),
        None => split,
    };

    // rounding may push the exponent across a bound (999.9 -> 1000)
    if rounded.exponent < lower_exp || rounded.exponent >= upper_exp {
        return to_exponential(value, precision);
    }

    let mut c = rounded.coefficients.clone();
    let e = rounded.exponent;

    // trailing zeros up to the requested digit count
    if let Some(p) = precision {
        while c.len() < p as usize {
            c.push(0);
        }
    }

    // trailing zeros until the integer part is fully represented
    while (c.len() as i64) < e + 1 {
        c.push(0);
    }

    // leading zeros for magnitudes below one
    if e < 0 {
        for _ in 0..(-e) {
            c.insert(0, 0);
        }
    }

    // decimal point after the integer part, omitted when nothing follows
    let dot = if e > 0 { e as usize } else { 0 };

    let mut out = String::with_capacity(c.len() + 2);
    out.push_str(rounded.sign_prefix());
    push_digits(&mut out, &c[..dot + 1]);
    if dot + 1 < c.len() {
        out.push('.');
        push_digits(&mut out, &c[dot + 1..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_fixed_range() {
        assert_eq!(to_precision(123.45, None, -3, 5), "123.45");
        assert_eq!(to_precision(0.004, None, -3, 5), "0.004");
        // exponent 4 is still inside the default bounds, 5 is not
        assert_eq!(to_precision(12345.0, None, -3, 5), "12345");
        assert_eq!(to_precision(123456.0, None, -3, 5), "1.23456e+5");
        assert_eq!(to_precision(0.0004, None, -3, 5), "4e-4");
    }

    #[test]
    fn test_precision_rounding() {
        assert_eq!(to_precision(123.45, Some(3), -3, 5), "123");
        assert_eq!(to_precision(123.45, Some(7), -3, 5), "123.4500");
        assert_eq!(to_precision(0.00123, Some(2), -3, 5), "0.0012");
    }

    #[test]
    fn test_precision_bounds_inclusivity() {
        // lower bound inclusive, below it exponential
        assert_eq!(to_precision(1e-2, None, -2, 5), "0.01");
        assert_eq!(to_precision(1e-3, None, -2, 5), "1e-3");

        // upper bound exclusive
        assert_eq!(to_precision(1e4, None, -3, 5), "10000");
        assert_eq!(to_precision(1e5, None, -3, 5), "1e+5");
    }

    #[test]
    fn test_precision_carry_across_bound() {
        // 999 rounded to 2 digits stays fixed as 1000
        assert_eq!(to_precision(999.0, Some(2), -3, 5), "1000");
        // but rounding 99999.9 crosses the upper bound
        assert_eq!(to_precision(99999.9, Some(3), -3, 5), "1.00e+5");
    }

    #[test]
    fn test_precision_non_finite() {
        assert_eq!(to_precision(f64::NAN, None, -3, 5), "NaN");
        assert_eq!(to_precision(f64::INFINITY, Some(2), -3, 5), "Infinity");
        assert_eq!(to_precision(f64::NEG_INFINITY, None, -3, 5), "-Infinity");
    }
}
