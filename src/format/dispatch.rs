// ============================================================================
// Format Dispatch
// Routes a value through the requested notation renderer
// ============================================================================

use super::options::{FormatOptions, Notation, NumberFormat};
use crate::notation::{
    non_finite_token, to_engineering, to_exponential, to_fixed, to_precision,
};

/// Format a value according to the given options.
///
/// A custom callback receives the raw value and its output is returned
/// verbatim, before any special-casing. Non-finite values render as their
/// literal tokens (`NaN`, `Infinity`, `-Infinity`). A bare precision means
/// auto notation rounded to that many significant digits.
///
/// Auto notation picks fixed or exponential form from the exponent bounds
/// and then drops insignificant trailing fractional zeros; digits of the
/// integer part are never touched.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(format(0.00001234, &NumberFormat::default()), "1.234e-5");
/// assert_eq!(format(123.456, &NumberFormat::Precision(4)), "123.5");
///
/// let options = FormatOptions::new().with_notation(Notation::Fixed).with_precision(1);
/// assert_eq!(format(123.456, &options.into()), "123.5");
/// ```
pub fn format(value: f64, options: &NumberFormat) -> String {
    let resolved = match options {
        NumberFormat::Custom(callback) => return callback(value),
        NumberFormat::Precision(precision) => FormatOptions::new().with_precision(*precision),
        NumberFormat::Options(options) => *options,
    };

    if let Some(token) = non_finite_token(value) {
        return token.to_string();
    }

    match resolved.notation {
        Notation::Fixed => to_fixed(value, resolved.precision),
        Notation::Exponential => to_exponential(value, resolved.precision),
        Notation::Engineering => to_engineering(value, resolved.precision),
        Notation::Auto => trim_fractional_zeros(&to_precision(
            value,
            resolved.precision,
            resolved.lower_exp,
            resolved.upper_exp,
        )),
    }
}

/// Format a value with the default options (auto notation, unrounded).
pub fn format_default(value: f64) -> String {
    format(value, &NumberFormat::default())
}

/// Count the significant digits of a value: the digits of its unrounded
/// exponential rendering, excluding the decimal point and leading zeros.
/// Zero has no significant digits.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// assert_eq!(digits(2.34), 3);
/// assert_eq!(digits(3000.0), 1);
/// assert_eq!(digits(0.0), 0);
/// ```
pub fn digits(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }

    let rendered = to_exponential(value, None);
    let mantissa = match rendered.find('e') {
        Some(idx) => &rendered[..idx],
        None => &rendered[..],
    };

    mantissa
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .skip_while(|&ch| ch == '0')
        .count()
}

/// Collapse a run of trailing zeros that sits after the decimal point,
/// directly before the end of the string or the exponent marker. The
/// decimal point goes with it when nothing else follows.
fn trim_fractional_zeros(rendered: &str) -> String {
    let (mantissa, exponent) = match rendered.find('e') {
        Some(idx) => rendered.split_at(idx),
        None => (rendered, ""),
    };

    // integer renderings carry no insignificant zeros
    if !mantissa.contains('.') {
        return rendered.to_string();
    }

    let trimmed = mantissa.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);

    let mut out = String::with_capacity(trimmed.len() + exponent.len());
    out.push_str(trimmed);
    out.push_str(exponent);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: f64) -> String {
        format(value, &NumberFormat::default())
    }

    #[test]
    fn test_format_auto_defaults() {
        assert_eq!(fmt(0.0), "0");
        assert_eq!(fmt(2.3), "2.3");
        assert_eq!(fmt(-2.3), "-2.3");
        assert_eq!(fmt(12345.0), "12345");
        assert_eq!(fmt(123456.0), "1.23456e+5");
        assert_eq!(fmt(0.004), "0.004");
        assert_eq!(fmt(0.0004), "4e-4");
    }

    #[test]
    fn test_format_bare_precision() {
        assert_eq!(format(1.0 / 3.0, &NumberFormat::Precision(3)), "0.333");
        assert_eq!(format(123.456, &NumberFormat::Precision(4)), "123.5");
        // auto cleanup strips the padding zeros a bare precision would add
        assert_eq!(format(2.5, &NumberFormat::Precision(5)), "2.5");
    }

    #[test]
    fn test_format_explicit_notations() {
        let fixed = FormatOptions::new()
            .with_notation(Notation::Fixed)
            .with_precision(2);
        assert_eq!(format(1234.5678, &fixed.into()), "1234.57");

        let exponential = FormatOptions::new()
            .with_notation(Notation::Exponential)
            .with_precision(3);
        assert_eq!(format(1234.5678, &exponential.into()), "1.23e+3");

        let engineering = FormatOptions::new()
            .with_notation(Notation::Engineering)
            .with_precision(3);
        assert_eq!(format(12400.0, &engineering.into()), "12.4e+3");
    }

    #[test]
    fn test_format_fixed_keeps_trailing_zeros() {
        // cleanup applies to auto notation only
        let fixed = FormatOptions::new()
            .with_notation(Notation::Fixed)
            .with_precision(3);
        assert_eq!(format(2.5, &fixed.into()), "2.500");
    }

    #[test]
    fn test_format_exponent_bounds() {
        let options = FormatOptions::new().with_lower_exp(-2);
        assert_eq!(format(1e-3, &options.into()), "1e-3");
        assert_eq!(format(1e-2, &options.into()), "0.01");

        let options = FormatOptions::new().with_upper_exp(3);
        assert_eq!(format(999.0, &options.into()), "999");
        assert_eq!(format(1000.0, &options.into()), "1e+3");
    }

    #[test]
    fn test_format_custom_callback() {
        let options = NumberFormat::custom(|value| std::format!("~{value:.1}~"));
        assert_eq!(format(2.34, &options), "~2.3~");
        // the callback sees raw non-finite values too
        assert_eq!(format(f64::NAN, &options), "~NaN~");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(fmt(f64::NAN), "NaN");
        assert_eq!(fmt(f64::INFINITY), "Infinity");
        assert_eq!(fmt(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(2.34), 3);
        assert_eq!(digits(3000.0), 1);
        assert_eq!(digits(0.0), 0);
        assert_eq!(digits(120.5e50), 4);
        assert_eq!(digits(-0.025), 2);
        assert_eq!(digits(f64::NAN), 0);
    }

    #[test]
    fn test_trim_fractional_zeros() {
        assert_eq!(trim_fractional_zeros("2.500"), "2.5");
        assert_eq!(trim_fractional_zeros("3.000"), "3");
        assert_eq!(trim_fractional_zeros("1.2300e+5"), "1.23e+5");
        assert_eq!(trim_fractional_zeros("1.000e-7"), "1e-7");
        // integer-part zeros are never stripped
        assert_eq!(trim_fractional_zeros("1000"), "1000");
        assert_eq!(trim_fractional_zeros("100.10"), "100.1");
    }
}
