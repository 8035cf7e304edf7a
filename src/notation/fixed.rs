// ============================================================================
// Fixed-Point Notation
// ============================================================================

use super::non_finite_token;
use crate::split::{round_digits, split_finite};

/// Render a value in fixed-point notation.
///
/// With `precision` given, exactly that many digits follow the decimal
/// point (the value is rounded to `exponent + 1 + precision` significant
/// digits first); without it, all significant digits are emitted.
///
/// Operates on the digit sequence directly, so values with far more digits
/// than native float-to-string conversion supports render exactly.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(to_fixed(1234.5678, Some(2)), "1234.57");
/// assert_eq!(
///     to_fixed(2.34e30, Some(1)),
///     "2340000000000000000000000000000.0"
/// );
/// ```
pub fn to_fixed(value: f64, precision: Option<u32>) -> String {
    if let Some(token) = non_finite_token(value) {
        return token.to_string();
    }

    let split = split_finite(value);
    let rounded = match precision {
        // round so that exactly `precision` digits follow the decimal point
        Some(p) => round_digits(&split, split.exponent + 1 + p as i64),
        None => split,
    };

    let mut c = rounded.coefficients.clone();
    // count of integer-part digits; may be zero or negative for
    // magnitudes below one
    let mut p = rounded.exponent + 1;

    // append zeros so every requested fractional position exists
    let target = p + precision.unwrap_or(0) as i64;
    while (c.len() as i64) < target {
        c.push(0);
    }

    // magnitudes below 0.1 need a "0.0..." prefix
    if p < 0 {
        for _ in 0..(-p + 1) {
            c.insert(0, 0);
        }
        p = 1;
    }

    let mut out = String::with_capacity(c.len() + 2);
    out.push_str(rounded.sign_prefix());
    for (i, &d) in c.iter().enumerate() {
        if i as i64 == p {
            if i == 0 {
                out.push('0');
            }
            out.push('.');
        }
        out.push((b'0' + d) as char);
    }
    out
}
