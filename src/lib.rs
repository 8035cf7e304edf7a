// ============================================================================
// decfmt Library
// Exact decimal formatting and tolerance-based float comparison
// ============================================================================

//! # decfmt
//!
//! A decimal number formatting and approximate-comparison engine.
//!
//! ## Features
//!
//! - **Exact decimal splitting** of finite values and numeric literal
//!   strings into a `{sign, coefficients, exponent}` decomposition
//! - **Significant-digit rounding** (half-up) with carry propagation across
//!   every digit position (999 rounds up to 1000)
//! - **Four notations**: fixed, exponential, engineering (exponent a
//!   multiple of 3), and auto-selected by exponent bounds
//! - **Arbitrary magnitudes**: digit-level rendering, so values far beyond
//!   native float-to-string limits format without precision loss
//! - **Tolerance comparison** with relative and absolute tolerances
//!
//! ## Example
//!
//! ```rust
//! use decfmt::prelude::*;
//!
//! // auto notation picks fixed or exponential and drops noise zeros
//! assert_eq!(format_default(12400.0), "12400");
//! assert_eq!(format_default(0.0000123), "1.23e-5");
//!
//! // engineering notation with explicit precision
//! let options = FormatOptions::new()
//!     .with_notation(Notation::Engineering)
//!     .with_precision(3);
//! assert_eq!(format(12400.0, &options.into()), "12.4e+3");
//!
//! // fixed notation handles magnitudes native formatting cannot
//! assert_eq!(
//!     to_fixed(2.34e30, Some(1)),
//!     "2340000000000000000000000000000.0"
//! );
//!
//! // approximate comparison absorbs binary float artifacts
//! assert!(nearly_equal(0.1 + 0.2, 0.3, Some(DEFAULT_REL_TOL), DEFAULT_ABS_TOL));
//! ```

pub mod compare;
pub mod errors;
pub mod format;
pub mod notation;
pub mod split;

// Re-exports for convenience
pub mod prelude {
    pub use crate::compare::{nearly_equal, DEFAULT_ABS_TOL, DEFAULT_REL_TOL};
    pub use crate::errors::{FormatError, FormatResult};
    pub use crate::format::{
        digits, format, format_default, FormatOptions, Notation, NumberFormat,
        DEFAULT_LOWER_EXP, DEFAULT_UPPER_EXP,
    };
    pub use crate::notation::{to_engineering, to_exponential, to_fixed, to_precision};
    pub use crate::split::{round_digits, Coefficients, SplitValue};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_split_round_render_pipeline() {
        let split: SplitValue = "999".parse().unwrap();
        let rounded = round_digits(&split, 2);
        assert_eq!(rounded.coefficients(), &[1]);
        assert_eq!(rounded.exponent(), split.exponent() + 1);
        assert_eq!(format(999.0, &NumberFormat::Precision(2)), "1000");
    }

    #[test]
    fn test_fixed_roundtrip_15_digits() {
        for value in [123.456789012345, -0.000123456789012, 98765432109876.5] {
            let rendered = to_fixed(value, None);
            let reparsed: f64 = rendered.parse().unwrap();
            assert_eq!(reparsed, value, "{rendered} did not round-trip");
        }
    }

    #[test]
    fn test_huge_fixed_rendering() {
        let rendered = to_fixed(2.34e30, Some(1));
        assert_eq!(rendered, "2340000000000000000000000000000.0");
        assert_eq!(rendered.len(), 33);
    }

    #[test]
    fn test_engineering_examples() {
        let engineering = |precision: u32| {
            NumberFormat::from(
                FormatOptions::new()
                    .with_notation(Notation::Engineering)
                    .with_precision(precision),
            )
        };
        assert_eq!(format(12400.0, &engineering(2)), "12e+3");
        assert_eq!(format(12400.0, &engineering(3)), "12.4e+3");
    }

    #[test]
    fn test_lower_exp_boundary_is_inclusive() {
        let options = NumberFormat::from(FormatOptions::new().with_lower_exp(-2));
        assert_eq!(format(1e-3, &options), "1e-3");
        assert_eq!(format(1e-2, &options), "0.01");
    }

    #[test]
    fn test_digit_counts() {
        assert_eq!(digits(2.34), 3);
        assert_eq!(digits(3000.0), 1);
        assert_eq!(digits(0.0), 0);
    }

    #[test]
    fn test_comparator_modes() {
        assert!(nearly_equal(
            0.1 + 0.2,
            0.3,
            Some(DEFAULT_REL_TOL),
            DEFAULT_ABS_TOL
        ));
        assert!(!nearly_equal(0.1 + 0.2, 0.3, None, DEFAULT_ABS_TOL));
    }

    #[test]
    fn test_unknown_notation_is_an_error() {
        let err = "bogus".parse::<Notation>().unwrap_err();
        assert_eq!(err, FormatError::UnknownNotation("bogus".to_string()));
    }

    #[test]
    fn test_splitter_rejects_non_numeric_text() {
        assert!(matches!(
            "Infinity".parse::<SplitValue>(),
            Err(FormatError::InvalidNumber(_))
        ));
        assert!(matches!(
            "two point five".parse::<SplitValue>(),
            Err(FormatError::InvalidNumber(_))
        ));
    }
}
