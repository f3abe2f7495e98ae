//! Type definitions for standard numeric format strings
//!
//! This module defines the parsed form of a standard format specifier and
//! the error type raised when a format string cannot be resolved.

use std::fmt;

/// Largest precision accepted in a standard format string.
pub const MAX_PRECISION: u32 = 99;

/// A standard format specifier letter, resolved case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    /// Currency (C): grouped digits with a currency symbol and sign pattern
    Currency,
    /// Fixed-point (F): plain digits with a fixed number of decimals
    FixedPoint,
    /// Number (N): fixed-point with digit grouping and a sign pattern
    Number,
    /// Percent (P): value scaled by 100 with a percent symbol
    Percent,
    /// Decimal (D): integral values only, zero-padded to the precision
    Decimal,
    /// General (G): shortest round-trip or significant-digit form
    General,
}

/// A fully parsed standard format string
///
/// Parsed fresh on every `format` call; never stored between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardFormat {
    /// The specifier letter
    pub specifier: Specifier,
    /// Explicit precision digits, if any were given
    pub precision: Option<u32>,
}

/// Error raised when a format string cannot be resolved to a renderer
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Standard format resolution is disabled on this formatter
    StandardDisabled,
    /// The format string was empty
    EmptyFormat,
    /// The first character is not a recognized specifier letter
    UnknownSpecifier(char),
    /// Trailing characters or a malformed precision after the specifier
    Malformed(String),
    /// The explicit precision exceeds [`MAX_PRECISION`]
    PrecisionOutOfRange(u32),
    /// The D specifier was applied to a value with a fractional part
    NotAnInteger(f64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::StandardDisabled => {
                write!(f, "standard format resolution is disabled")
            }
            FormatError::EmptyFormat => write!(f, "format string is empty"),
            FormatError::UnknownSpecifier(letter) => {
                write!(f, "unrecognized standard format specifier: '{letter}'")
            }
            FormatError::Malformed(format_string) => {
                write!(f, "'{format_string}' is not a standard numeric format string")
            }
            FormatError::PrecisionOutOfRange(precision) => {
                write!(
                    f,
                    "precision {precision} is greater than the maximum of {MAX_PRECISION}"
                )
            }
            FormatError::NotAnInteger(value) => {
                write!(f, "the D specifier requires an integral value, got {value}")
            }
        }
    }
}

impl std::error::Error for FormatError {}
