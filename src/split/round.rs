// ============================================================================
// Significant-Digit Rounding
// Half-up rounding with carry propagation over the digit sequence
// ============================================================================

use super::value::SplitValue;

/// Round a split value to at most `precision` significant digits, half-up.
///
/// A discarded leading digit of 5 or more increments the last retained
/// digit; carries ripple toward the most significant digit, and a carry past
/// it prepends a `1` and raises the exponent (`999` rounded to 2 digits
/// becomes `1` with the exponent raised by one, i.e. `1000`).
///
/// `precision` may be zero or negative: the value is first padded with
/// leading zero placeholders so that rounding a magnitude entirely below the
/// requested position still yields a well-formed result.
///
/// The input is left untouched; the returned value owns a fresh digit
/// sequence.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// let v: SplitValue = "2.345".parse().unwrap();
/// let rounded = round_digits(&v, 3);
/// assert_eq!(rounded.coefficients(), &[2, 3, 5]);
/// assert_eq!(v.coefficients(), &[2, 3, 4, 5]);
/// ```
pub fn round_digits(split: &SplitValue, precision: i64) -> SplitValue {
    let mut rounded = split.clone();
    let mut precision = precision;

    // pad with leading zero placeholders until at least one digit position
    // falls inside the rounding window
    while precision <= 0 {
        rounded.coefficients.insert(0, 0);
        rounded.exponent += 1;
        precision += 1;
    }

    let precision = precision as usize;
    let c = &mut rounded.coefficients;

    if c.len() > precision {
        let first_removed = c[precision];
        c.truncate(precision);

        if first_removed >= 5 {
            let mut i = precision - 1;
            c[i] += 1;
            while c[i] == 10 {
                c.pop();
                if i == 0 {
                    // carry past the most significant digit: 999 -> 1000
                    c.insert(0, 0);
                    rounded.exponent += 1;
                    i += 1;
                }
                i -= 1;
                c[i] += 1;
            }
        }
    }

    rounded
}
