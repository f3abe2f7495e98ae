use winnow::Parser;
use winnow::combinator::opt;

use crate::parser::tokens::{parse_precision, parse_specifier};
use crate::types::{FormatError, MAX_PRECISION, StandardFormat};

/// Parse a standard numeric format string
///
/// This is the main public API entry point of this module. It accepts a
/// format string such as `"N2"` or `"c"` and returns the parsed
/// [`StandardFormat`].
///
/// # Arguments
/// * `input_str` - The format string to parse
///
/// # Returns
/// * `Result<StandardFormat, FormatError>` - The parsed specifier, or why
///   the string cannot be resolved
///
/// # Examples
/// ```
/// use numfmt_standard::parser::parse_standard_format;
/// use numfmt_standard::types::Specifier;
///
/// let format = parse_standard_format("N2").unwrap();
/// assert_eq!(format.specifier, Specifier::Number);
/// assert_eq!(format.precision, Some(2));
/// ```
pub fn parse_standard_format(input_str: &str) -> Result<StandardFormat, FormatError> {
    if input_str.is_empty() {
        return Err(FormatError::EmptyFormat);
    }

    let mut input = input_str;

    let specifier = parse_specifier(&mut input).map_err(|_| {
        match input_str.chars().next() {
            Some(letter) => FormatError::UnknownSpecifier(letter),
            None => FormatError::EmptyFormat,
        }
    })?;

    let precision = opt(parse_precision)
        .parse_next(&mut input)
        .map_err(|_| FormatError::Malformed(input_str.to_string()))?;

    // A negative precision, a non-digit suffix, or an overlong digit run all
    // leave unconsumed input behind.
    if !input.is_empty() {
        return Err(FormatError::Malformed(input_str.to_string()));
    }

    if let Some(precision) = precision
        && precision > MAX_PRECISION
    {
        return Err(FormatError::PrecisionOutOfRange(precision));
    }

    Ok(StandardFormat {
        specifier,
        precision,
    })
}
