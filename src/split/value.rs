// ============================================================================
// Split Value
// Exact decimal decomposition of a finite number
// ============================================================================

use crate::errors::{FormatError, FormatResult};
use smallvec::SmallVec;
use std::str::FromStr;

/// Digit storage for a split value.
///
/// Values that round-trip through f64 carry at most 17 significant digits,
/// so the inline capacity keeps the common case off the heap.
pub type Coefficients = SmallVec<[u8; 16]>;

/// Canonical `{sign, coefficients, exponent}` decomposition of one finite
/// number.
///
/// The represented magnitude is `0.<coefficients> × 10^(exponent + 1)`;
/// equivalently, the first coefficient digit occupies the `10^exponent`
/// place.
///
/// Invariants:
/// - `coefficients` is never empty; exact zero is the single digit `0`
/// - no leading zero digits, and no trailing zero digits past the last
///   significant one (stripped leading zeros lower the exponent, stripped
///   trailing zeros leave it unchanged)
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// let v: SplitValue = "123.45".parse().unwrap();
/// assert!(!v.is_negative());
/// assert_eq!(v.coefficients(), &[1, 2, 3, 4, 5]);
/// assert_eq!(v.exponent(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitValue {
    pub(crate) sign: bool,
    pub(crate) coefficients: Coefficients,
    pub(crate) exponent: i64,
}

impl SplitValue {
    /// Split a finite value into its decimal decomposition.
    ///
    /// The value is first rendered through Rust's shortest round-trip
    /// exponential conversion, so the decomposition carries exactly the
    /// digits needed to reproduce the f64.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the value is NaN or infinite.
    pub fn from_f64(value: f64) -> FormatResult<Self> {
        if !value.is_finite() {
            return Err(FormatError::InvalidNumber(value.to_string()));
        }
        // collapse -0.0 so zero always splits to {+, [0], 0}
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{:e}", value).parse()
    }

    /// Whether the represented value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// The digit sequence, most significant first.
    #[inline]
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Decimal exponent of the first coefficient digit.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// `"-"` for negative values, `""` otherwise.
    #[inline]
    pub(crate) fn sign_prefix(&self) -> &'static str {
        if self.sign {
            "-"
        } else {
            ""
        }
    }
}

/// Split a value the renderers have already checked to be finite.
///
/// Infallible for finite input: `from_f64` renders through `{:e}`, whose
/// output for any finite f64 (`['-'] digit ['.' digits] 'e' ['-'] digits`)
/// is a subset of the literal grammar, so the parse cannot fail.
pub(crate) fn split_finite(value: f64) -> SplitValue {
    debug_assert!(value.is_finite());
    SplitValue::from_f64(value).expect("finite values match the literal grammar")
}

impl FromStr for SplitValue {
    type Err = FormatError;

    /// Parse a numeric literal of the form
    /// `['-'] digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`.
    ///
    /// Leading zeros are permitted. The literal tokens `NaN` and `Infinity`,
    /// non-numeric text, and malformed exponents are all rejected.
    ///
    /// # Examples
    /// - `"123.45"` -> coefficients `[1,2,3,4,5]`, exponent `2`
    /// - `"0.00500"` -> coefficients `[5]`, exponent `-3`
    /// - `"-2.5e-3"` -> negative, coefficients `[2,5]`, exponent `-3`
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidNumber(text.to_string());
        let bytes = text.as_bytes();
        let mut pos = 0;

        let sign = if bytes.first() == Some(&b'-') {
            pos += 1;
            true
        } else {
            false
        };

        // integer digits (at least one required)
        let int_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == int_start {
            return Err(invalid());
        }
        let int_digits = &bytes[int_start..pos];

        // optional fraction
        let frac_digits = if pos < bytes.len() && bytes[pos] == b'.' {
            pos += 1;
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            &bytes[start..pos]
        } else {
            &bytes[pos..pos]
        };

        // optional explicit exponent
        let mut exponent: i64 = 0;
        if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
            pos += 1;
            let exp_negative = match bytes.get(pos) {
                Some(b'+') => {
                    pos += 1;
                    false
                },
                Some(b'-') => {
                    pos += 1;
                    true
                },
                _ => false,
            };
            let start = pos;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
            if pos == start {
                return Err(invalid());
            }
            let magnitude: i64 = text[start..pos].parse().map_err(|_| invalid())?;
            exponent = if exp_negative { -magnitude } else { magnitude };
        }

        if pos != bytes.len() {
            return Err(invalid());
        }

        // the first integer digit sits at 10^(count - 1) before the explicit
        // exponent is applied
        exponent += int_digits.len() as i64 - 1;

        let mut coefficients = Coefficients::new();
        for &b in int_digits.iter().chain(frac_digits.iter()) {
            let digit = b - b'0';
            if coefficients.is_empty() && digit == 0 {
                // stripped leading zeros lower the exponent
                exponent -= 1;
            } else {
                coefficients.push(digit);
            }
        }

        // trailing zeros never affect the exponent
        while coefficients.last() == Some(&0) {
            coefficients.pop();
        }

        if coefficients.is_empty() {
            // the value is exactly zero; compensate for the fully stripped
            // digit string
            coefficients.push(0);
            exponent += 1;
        }

        Ok(SplitValue {
            sign,
            coefficients,
            exponent,
        })
    }
}
