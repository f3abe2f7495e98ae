//! Parser for standard numeric format strings
//!
//! A standard format string is a single specifier letter optionally
//! followed by a precision, e.g. `"N2"`, `"c"`, `"F0"`.

pub mod format;
pub mod tokens;

pub use format::parse_standard_format;
