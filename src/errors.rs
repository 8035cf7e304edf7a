// ============================================================================
// Formatting Errors
// Error types for decimal splitting and notation dispatch
// ============================================================================

use std::fmt;

/// Errors that can occur while splitting or formatting a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Input text does not match the numeric literal grammar
    /// `['-'] digits ['.' digits] [('e'|'E') ['+'|'-'] digits]`
    InvalidNumber(String),
    /// Notation name outside the recognized set
    /// (`fixed`, `exponential`, `engineering`, `auto`)
    UnknownNotation(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidNumber(text) => {
                write!(f, "invalid number: could not parse {:?}", text)
            },
            FormatError::UnknownNotation(name) => write!(
                f,
                "unknown notation {:?}: expected \"fixed\", \"exponential\", \
                 \"engineering\", or \"auto\"",
                name
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
