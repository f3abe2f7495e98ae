//! Standard numeric format rendering
//!
//! This module resolves a standard format string against a bound
//! [`FormatConfig`] and renders an `f64` to its final string. The main
//! entry point is [`NumberFormatter::format`].

mod digits;
mod patterns;
mod standard;

use crate::config::FormatConfig;
use crate::parser::parse_standard_format;
use crate::types::{FormatError, Specifier, StandardFormat};

/// A formatter bound to a set of numeric-locale conventions
///
/// The formatter borrows its configuration, so the configuration cannot be
/// mutated while a formatter holds it; build a new formatter after
/// reconfiguring. `format` keeps no per-call state and the same formatter
/// can be shared freely across threads.
///
/// # Examples
/// ```
/// use numfmt_standard::{FormatConfig, NumberFormatter};
///
/// let config = FormatConfig::default();
/// let formatter = NumberFormatter::new(&config);
/// assert_eq!(formatter.format(1234.5, "N2").unwrap(), "1,234.50");
/// assert_eq!(formatter.format(1234.56, "C").unwrap(), "$1,234.56");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberFormatter<'a> {
    is_standard_enabled: bool,
    config: &'a FormatConfig,
}

impl<'a> NumberFormatter<'a> {
    /// Create a formatter with standard format resolution enabled
    pub fn new(config: &'a FormatConfig) -> Self {
        Self {
            is_standard_enabled: true,
            config,
        }
    }

    /// Create a formatter with an explicit resolution switch
    ///
    /// With `is_standard_enabled` set to `false`, every call to
    /// [`format`](Self::format) fails with [`FormatError::StandardDisabled`].
    pub fn with_standard_enabled(config: &'a FormatConfig, is_standard_enabled: bool) -> Self {
        Self {
            is_standard_enabled,
            config,
        }
    }

    /// Whether standard format resolution is attempted at all
    pub fn is_standard_enabled(&self) -> bool {
        self.is_standard_enabled
    }

    /// The bound configuration
    pub fn config(&self) -> &FormatConfig {
        self.config
    }

    /// Render a value according to a standard format string
    ///
    /// # Arguments
    /// * `value` - The numeric value to format
    /// * `format_string` - A specifier letter with optional precision,
    ///   e.g. `"C"`, `"n3"`, `"P0"`
    ///
    /// # Returns
    /// * `Result<String, FormatError>` - The rendered string, or why the
    ///   format string cannot be resolved
    pub fn format(&self, value: f64, format_string: &str) -> Result<String, FormatError> {
        if !self.is_standard_enabled {
            return Err(FormatError::StandardDisabled);
        }
        let format = parse_standard_format(format_string)?;
        self.render(value, &format)
    }

    fn render(&self, value: f64, format: &StandardFormat) -> Result<String, FormatError> {
        // Non-finite values render as fixed literals, skipping grouping and
        // rounding entirely.
        if value.is_nan() {
            return Ok(self.config.nan_symbol().to_string());
        }
        if value.is_infinite() {
            return Ok(if value > 0.0 {
                self.config.positive_infinity_symbol().to_string()
            } else {
                self.config.negative_infinity_symbol().to_string()
            });
        }

        match format.specifier {
            Specifier::Currency => Ok(standard::currency(value, format.precision, self.config)),
            Specifier::FixedPoint => {
                Ok(standard::fixed_point(value, format.precision, self.config))
            }
            Specifier::Number => Ok(standard::number(value, format.precision, self.config)),
            Specifier::Percent => Ok(standard::percent(value, format.precision, self.config)),
            Specifier::Decimal => standard::decimal(value, format.precision, self.config),
            Specifier::General => Ok(standard::general(value, format.precision, self.config)),
        }
    }
}

/// Format a value with a one-off formatter over the given configuration
///
/// # Examples
/// ```
/// use numfmt_standard::{FormatConfig, format_standard};
///
/// let config = FormatConfig::default();
/// assert_eq!(format_standard(0.5, "P0", &config).unwrap(), "50%");
/// ```
pub fn format_standard(
    value: f64,
    format_string: &str,
    config: &FormatConfig,
) -> Result<String, FormatError> {
    NumberFormatter::new(config).format(value, format_string)
}
