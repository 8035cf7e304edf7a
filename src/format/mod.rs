// ============================================================================
// Format Module
// Option resolution and notation dispatch
// ============================================================================
//
// This module provides:
// - Notation: the four supported rendering styles
// - FormatOptions: notation, precision, and auto-notation exponent bounds
// - NumberFormat: the polymorphic options argument (bare precision, full
//   options, or a custom callback)
// - format / format_default: the dispatcher
// - digits: significant-digit counter

mod dispatch;
mod options;

pub use dispatch::{digits, format, format_default};
pub use options::{
    FormatOptions, Notation, NumberFormat, DEFAULT_LOWER_EXP, DEFAULT_UPPER_EXP,
};
