// ============================================================================
// Split Module
// Canonical decimal decomposition and significant-digit rounding
// ============================================================================
//
// This module provides:
// - SplitValue: exact {sign, coefficients, exponent} decomposition
// - round_digits: half-up rounding with carry propagation
//
// Design principles:
// - Digit-level arithmetic only; no floating point past the initial split
// - Rounding is a pure value transformation (the input is never mutated)
// - Coefficients stay inline for the common f64-sized case (SmallVec)

mod round;
mod value;

pub use round::round_digits;
pub use value::{Coefficients, SplitValue};

pub(crate) use value::split_finite;
