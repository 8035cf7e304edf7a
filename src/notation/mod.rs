// ============================================================================
// Notation Module
// Textual renderers for the four supported notations
// ============================================================================
//
// This module provides:
// - to_fixed: fixed-point rendering, `['-'] digits ['.' digits]`
// - to_exponential: `['-'] digit ['.' digits] 'e' ('+'|'-') digits`
// - to_engineering: exponential with the exponent forced to a multiple of 3
// - to_precision: fixed or exponential, selected by exponent bounds
//
// All renderers handle NaN and the infinities up front by returning their
// literal tokens; splitting only ever sees finite values. Digit sequences
// are manipulated directly, so magnitudes far beyond the native float
// formatting limits render without precision loss.

mod engineering;
mod exponential;
mod fixed;
mod precision;

pub use engineering::to_engineering;
pub use exponential::to_exponential;
pub use fixed::to_fixed;
pub use precision::to_precision;

/// Literal token for a non-finite value, or None when the value is finite.
pub(crate) fn non_finite_token(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Append a digit sequence to the output as ASCII.
pub(crate) fn push_digits(out: &mut String, digits: &[u8]) {
    for &d in digits {
        out.push((b'0' + d) as char);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_token() {
        assert_eq!(non_finite_token(f64::NAN), Some("NaN"));
        assert_eq!(non_finite_token(f64::INFINITY), Some("Infinity"));
        assert_eq!(non_finite_token(f64::NEG_INFINITY), Some("-Infinity"));
        assert_eq!(non_finite_token(0.0), None);
        assert_eq!(non_finite_token(-123.45), None);
    }
}
