// ============================================================================
// Format Options
// Notation selection, precision, and the polymorphic options argument
// ============================================================================

use crate::errors::FormatError;
use std::fmt;
use std::str::FromStr;
use std::sync::Once;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default lower exponent bound for auto notation (inclusive).
pub const DEFAULT_LOWER_EXP: i64 = -3;

/// Default upper exponent bound for auto notation (exclusive).
pub const DEFAULT_UPPER_EXP: i64 = 5;

// ============================================================================
// Notation
// ============================================================================

/// Rendering style for a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Notation {
    /// Fixed-point: `['-'] digits ['.' digits]`
    Fixed,
    /// Exponential: `['-'] digit ['.' digits] 'e' ('+'|'-') digits`
    Exponential,
    /// Exponential with the exponent forced to a multiple of 3
    Engineering,
    /// Fixed or exponential, chosen by the exponent bounds
    #[default]
    Auto,
}

impl FromStr for Notation {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "fixed" => Ok(Notation::Fixed),
            "exponential" => Ok(Notation::Exponential),
            "engineering" => Ok(Notation::Engineering),
            "auto" => Ok(Notation::Auto),
            _ => Err(FormatError::UnknownNotation(name.to_string())),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notation::Fixed => "fixed",
            Notation::Exponential => "exponential",
            Notation::Engineering => "engineering",
            Notation::Auto => "auto",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// Format Options
// ============================================================================

/// Configuration for rendering one value.
///
/// # Example
/// ```
/// use decfmt::prelude::*;
///
/// let options = FormatOptions::new()
///     .with_notation(Notation::Engineering)
///     .with_precision(3);
/// assert_eq!(format(12400.0, &options.into()), "12.4e+3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    /// Rendering style (default `Auto`)
    pub notation: Notation,

    /// Number of significant digits; `None` renders all digits unrounded
    pub precision: Option<u32>,

    /// Auto notation renders fixed for exponents at or above this bound
    pub lower_exp: i64,

    /// Auto notation renders fixed for exponents strictly below this bound
    pub upper_exp: i64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            notation: Notation::Auto,
            precision: None,
            lower_exp: DEFAULT_LOWER_EXP,
            upper_exp: DEFAULT_UPPER_EXP,
        }
    }
}

impl FormatOptions {
    /// Create the default options (auto notation, unrounded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the notation.
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builder method: set the significant digit count.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder method: set the inclusive lower exponent bound.
    pub fn with_lower_exp(mut self, lower_exp: i64) -> Self {
        self.lower_exp = lower_exp;
        self
    }

    /// Builder method: set the exclusive upper exponent bound.
    pub fn with_upper_exp(mut self, upper_exp: i64) -> Self {
        self.upper_exp = upper_exp;
        self
    }

    /// Legacy builder taking magnitude bounds instead of exponent bounds.
    ///
    /// Each bound is converted to an exponent via base-10 logarithm
    /// rounding, e.g. a lower bound of `1e-6` becomes `lower_exp = -6`. A
    /// deprecation notice is logged once per process; without a tracing
    /// subscriber it is a no-op.
    #[deprecated(since = "0.1.0", note = "use with_lower_exp / with_upper_exp")]
    pub fn with_exponential_bounds(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        static NOTICE: Once = Once::new();
        NOTICE.call_once(|| {
            tracing::warn!(
                "exponential magnitude bounds are deprecated; \
                 use with_lower_exp / with_upper_exp instead"
            );
        });

        if let Some(lower) = lower {
            self.lower_exp = lower.log10().round() as i64;
        }
        if let Some(upper) = upper {
            self.upper_exp = upper.log10().round() as i64;
        }
        self
    }
}

// ============================================================================
// Polymorphic Options Argument
// ============================================================================

/// The options argument accepted by [`format`](crate::format):
/// a bare precision, a full options value, or a custom callback that
/// bypasses all other logic and produces the final string itself.
pub enum NumberFormat {
    /// Bare significant digit count, auto notation
    Precision(u32),
    /// Full options
    Options(FormatOptions),
    /// Custom formatter; receives the raw value, its output is returned
    /// verbatim
    Custom(Box<dyn Fn(f64) -> String>),
}

impl NumberFormat {
    /// Wrap a custom formatting callback.
    pub fn custom<F>(callback: F) -> Self
    where
        F: Fn(f64) -> String + 'static,
    {
        NumberFormat::Custom(Box::new(callback))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Options(FormatOptions::default())
    }
}

impl fmt::Debug for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberFormat::Precision(p) => f.debug_tuple("Precision").field(p).finish(),
            NumberFormat::Options(options) => f.debug_tuple("Options").field(options).finish(),
            NumberFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<u32> for NumberFormat {
    fn from(precision: u32) -> Self {
        NumberFormat::Precision(precision)
    }
}

impl From<FormatOptions> for NumberFormat {
    fn from(options: FormatOptions) -> Self {
        NumberFormat::Options(options)
    }
}
