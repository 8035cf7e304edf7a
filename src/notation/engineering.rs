// ============================================================================
// Engineering Notation
// Exponential form with the exponent forced to a multiple of 3
// ============================================================================

use super::{non_finite_token, push_digits};
use crate::split::{round_digits, split_finite};

/// Render a value in engineering notation: like exponential, but the
/// exponent is the nearest multiple of 3 at or below the true exponent, so
/// one to three digits precede the decimal point.
///
/// Without `precision` the fractional part is dropped when all of its
/// digits are zero; with `precision` the digit count is honored exactly
/// (padding with trailing zeros where needed).
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(to_engineering(12400.0, Some(2)), "12e+3");
/// assert_eq!(to_engineering(12400.0, Some(3)), "12.4e+3");
/// assert_eq!(to_engineering(1e8, None), "100e+6");
/// ```
pub fn to_engineering(value: f64, precision: Option<u32>) -> String {
    if let Some(token) = non_finite_token(value) {
        return token.to_string();
    }

    let split = split_finite(value);
    let rounded = match precision {
        Some(p) => round_digits(&split, p as i64),
        None => split,
    };

    let e = rounded.exponent;
    let mut c = rounded.coefficients.clone();

    // nearest multiple of 3 at or below the true exponent
    let eng_exponent = if e % 3 == 0 {
        e
    } else if e < 0 {
        (e - 3) - (e % 3)
    } else {
        e - (e % 3)
    };

    // 1 to 3 digits precede the decimal point
    let integer_digits = (e - eng_exponent) as usize + 1;

    // pad with trailing zeros until the integer part is filled, and with
    // explicit precision until the requested digit count is reached
    let target = match precision {
        Some(p) => integer_digits.max(p as usize),
        None => integer_digits,
    };
    while c.len() < target {
        c.push(0);
    }

    let decimals = &c[integer_digits..];
    let keep_decimals =
        !decimals.is_empty() && (precision.is_some() || decimals.iter().any(|&d| d != 0));

    let mut out = String::with_capacity(c.len() + 6);
    out.push_str(rounded.sign_prefix());
    push_digits(&mut out, &c[..integer_digits]);
    if keep_decimals {
        out.push('.');
        push_digits(&mut out, decimals);
    }
    out.push('e');
    if eng_exponent >= 0 {
        out.push('+');
    }
    out.push_str(&eng_exponent.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineering_unrounded() {
        assert_eq!(to_engineering(12400.0, None), "12.4e+3");
        assert_eq!(to_engineering(1e8, None), "100e+6");
        assert_eq!(to_engineering(2.0, None), "2e+0");
        assert_eq!(to_engineering(0.0126, None), "12.6e-3");
        assert_eq!(to_engineering(0.006, None), "6e-3");
        assert_eq!(to_engineering(-12.3, None), "-12.3e+0");
    }

    #[test]
    fn test_engineering_with_precision() {
        assert_eq!(to_engineering(12400.0, Some(2)), "12e+3");
        assert_eq!(to_engineering(12400.0, Some(3)), "12.4e+3");
        // explicit precision keeps trailing zeros
        assert_eq!(to_engineering(12400.0, Some(4)), "12.40e+3");
        assert_eq!(to_engineering(2.0, Some(3)), "2.00e+0");
    }

    #[test]
    fn test_engineering_exponent_is_multiple_of_three() {
        for value in [1e-7, 3e-4, 0.02, 5.0, 700.0, 1.23e11] {
            let rendered = to_engineering(value, None);
            let exponent: i64 = rendered[rendered.find('e').unwrap() + 1..]
                .parse()
                .unwrap();
            assert_eq!(exponent % 3, 0, "exponent of {rendered} not aligned");
        }
    }

    #[test]
    fn test_engineering_rounding_carry() {
        // 999.9 at 3 digits carries into the next thousand group
        assert_eq!(to_engineering(999.9, Some(3)), "1.00e+3");
    }

    #[test]
    fn test_engineering_zero() {
        assert_eq!(to_engineering(0.0, None), "0e+0");
    }

    #[test]
    fn test_engineering_non_finite() {
        assert_eq!(to_engineering(f64::NAN, Some(3)), "NaN");
        assert_eq!(to_engineering(f64::INFINITY, None), "Infinity");
        assert_eq!(to_engineering(f64::NEG_INFINITY, None), "-Infinity");
    }
}
