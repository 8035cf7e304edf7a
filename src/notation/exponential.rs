// ============================================================================
// Exponential Notation
// ============================================================================

use super::{non_finite_token, push_digits};
use crate::split::{round_digits, split_finite};

/// Render a value in exponential notation,
/// `['-'] digit ['.' digits] 'e' ('+'|'-') digits`.
///
/// With `precision` given, exactly that many significant digits are
/// emitted, padded with trailing zeros when the value carries fewer. The
/// fractional part is omitted entirely when only one digit remains.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(to_exponential(1234.5678, Some(3)), "1.23e+3");
/// assert_eq!(to_exponential(0.0023, None), "2.3e-3");
/// ```
pub fn to_exponential(value: f64, precision: Option<u32>) -> String {
    if let Some(token) = non_finite_token(value) {
        return token.to_string();
    }

    let split = split_finite(value);
    let rounded = match precision {
        Some(p) => round_digits(&split, p as i64),
        None => split,
    };

    let mut c = rounded.coefficients.clone();
    let e = rounded.exponent;

    // pad with trailing zeros up to the requested digit count
    if let Some(p) = precision {
        while c.len() < p as usize {
            c.push(0);
        }
    }

    let mut out = String::with_capacity(c.len() + 6);
    out.push_str(rounded.sign_prefix());
    out.push((b'0' + c[0]) as char);
    if c.len() > 1 {
        out.push('.');
        push_digits(&mut out, &c[1..]);
    }
    out.push('e');
    if e >= 0 {
        out.push('+');
    }
    out.push_str(&e.to_string());
    out
}
