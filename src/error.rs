//! # Error Types
//!
//! Validation errors returned by the barcode spec factories. Everything
//! else in the crate is total: encoding substitutes, the builder coerces
//! out-of-range inputs, and serialization cannot fail.

use thiserror::Error;

/// Why a barcode spec factory rejected its input.
///
/// A spec is only ever constructed from valid input; these errors are the
/// complete list of reasons construction can be refused. They are plain
/// values — compare them, match on them, print them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The content string is empty.
    #[error("barcode content must not be empty")]
    EmptyContent,

    /// The content exceeds the symbology's capacity.
    #[error("barcode content exceeds the maximum of {limit} characters")]
    TooLong { limit: usize },

    /// A numeric barcode got content of the wrong length. `expected` is
    /// the full length including the check digit; one less is also
    /// accepted (the check digit is then computed).
    #[error("expected {expected} digits (or {} without check digit), got {actual}", expected - 1)]
    IncorrectLength { expected: usize, actual: usize },

    /// A numeric barcode got a non-digit character.
    #[error("illegal character {character:?} at index {index}")]
    IllegalCharacter { index: usize, character: char },

    /// The supplied check digit does not match the computed one.
    #[error("invalid check digit: expected {expected}, got {actual}")]
    InvalidCheckDigit { expected: u8, actual: u8 },
}
