//! Numeric-locale formatting conventions
//!
//! This module holds the validated configuration consumed by the standard
//! renderers: decimal digit counts, separators, group sizes and sign
//! patterns. Every mutation goes through a setter that checks the field's
//! domain and leaves the previous value in place on failure.

use std::fmt;

/// Error type for configuration operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A numeric field was set to a value outside its allowed range
    OutOfRange(String),
    /// A field that must not be empty was set to an empty string
    EmptyValue(String),
    /// A group-size sequence carried elements past a terminating zero
    GroupAfterZero(String),
    /// An error occurred while parsing configuration data
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange(msg) => write!(f, "value out of range: {msg}"),
            ConfigError::EmptyValue(msg) => write!(f, "empty value: {msg}"),
            ConfigError::GroupAfterZero(msg) => write!(f, "invalid group sizes: {msg}"),
            ConfigError::Parse(msg) => write!(f, "error parsing configuration data: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

type Result<T> = std::result::Result<T, ConfigError>;

/// Locale conventions for rendering numbers as strings
///
/// Construct with [`FormatConfig::default`] (invariant-culture values) or
/// [`FormatConfig::from_toml_str`], then adjust individual fields through
/// the validated setters. A rejected assignment leaves the field unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    currency_decimal_digits: u32,
    currency_decimal_separator: String,
    currency_group_separator: String,
    currency_group_sizes: Vec<u8>,
    currency_negative_pattern: u8,
    currency_positive_pattern: u8,
    currency_symbol: String,
    number_decimal_digits: u32,
    number_decimal_separator: String,
    number_group_separator: String,
    number_group_sizes: Vec<u8>,
    number_negative_pattern: u8,
    percent_decimal_digits: u32,
    percent_decimal_separator: String,
    percent_group_separator: String,
    percent_group_sizes: Vec<u8>,
    percent_negative_pattern: u8,
    percent_positive_pattern: u8,
    percent_symbol: String,
    negative_sign: String,
    nan_symbol: String,
    positive_infinity_symbol: String,
    negative_infinity_symbol: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency_decimal_digits: 2,
            currency_decimal_separator: ".".to_string(),
            currency_group_separator: ",".to_string(),
            currency_group_sizes: vec![3],
            currency_negative_pattern: 0,
            currency_positive_pattern: 0,
            currency_symbol: "$".to_string(),
            number_decimal_digits: 2,
            number_decimal_separator: ".".to_string(),
            number_group_separator: ",".to_string(),
            number_group_sizes: vec![3],
            number_negative_pattern: 1,
            percent_decimal_digits: 2,
            percent_decimal_separator: ".".to_string(),
            percent_group_separator: ",".to_string(),
            percent_group_sizes: vec![3],
            percent_negative_pattern: 1,
            percent_positive_pattern: 1,
            percent_symbol: "%".to_string(),
            negative_sign: "-".to_string(),
            nan_symbol: "NaN".to_string(),
            positive_infinity_symbol: "Infinity".to_string(),
            negative_infinity_symbol: "-Infinity".to_string(),
        }
    }
}

impl FormatConfig {
    /// Number of decimal places in currency values. Defaults to 2.
    pub fn currency_decimal_digits(&self) -> u32 {
        self.currency_decimal_digits
    }

    pub fn set_currency_decimal_digits(&mut self, value: u32) -> Result<()> {
        check_decimal_digits("currency_decimal_digits", value)?;
        self.currency_decimal_digits = value;
        Ok(())
    }

    /// Decimal separator in currency values. Defaults to `"."`.
    pub fn currency_decimal_separator(&self) -> &str {
        &self.currency_decimal_separator
    }

    pub fn set_currency_decimal_separator(&mut self, value: &str) -> Result<()> {
        check_not_empty("currency_decimal_separator", value)?;
        self.currency_decimal_separator = value.to_string();
        Ok(())
    }

    /// Separator between digit groups in currency values. Defaults to `","`.
    ///
    /// An empty separator disables grouping.
    pub fn currency_group_separator(&self) -> &str {
        &self.currency_group_separator
    }

    pub fn set_currency_group_separator(&mut self, value: &str) -> Result<()> {
        self.currency_group_separator = value.to_string();
        Ok(())
    }

    /// Digit group sizes in currency values, least significant first.
    /// Defaults to `[3]`.
    pub fn currency_group_sizes(&self) -> &[u8] {
        &self.currency_group_sizes
    }

    pub fn set_currency_group_sizes(&mut self, sizes: &[u8]) -> Result<()> {
        check_group_sizes("currency_group_sizes", sizes)?;
        self.currency_group_sizes = sizes.to_vec();
        Ok(())
    }

    /// Layout index for negative currency values, 0 through 15. Defaults to 0.
    pub fn currency_negative_pattern(&self) -> u8 {
        self.currency_negative_pattern
    }

    pub fn set_currency_negative_pattern(&mut self, value: u8) -> Result<()> {
        check_pattern("currency_negative_pattern", value, 15)?;
        self.currency_negative_pattern = value;
        Ok(())
    }

    /// Layout index for positive currency values, 0 through 3. Defaults to 0.
    pub fn currency_positive_pattern(&self) -> u8 {
        self.currency_positive_pattern
    }

    pub fn set_currency_positive_pattern(&mut self, value: u8) -> Result<()> {
        check_pattern("currency_positive_pattern", value, 3)?;
        self.currency_positive_pattern = value;
        Ok(())
    }

    /// Currency symbol. Defaults to `"$"`.
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn set_currency_symbol(&mut self, value: &str) {
        self.currency_symbol = value.to_string();
    }

    /// Builder form of [`set_currency_symbol`](Self::set_currency_symbol).
    pub fn with_currency_symbol(mut self, value: &str) -> Self {
        self.currency_symbol = value.to_string();
        self
    }

    /// Number of decimal places in plain numeric values. Defaults to 2.
    pub fn number_decimal_digits(&self) -> u32 {
        self.number_decimal_digits
    }

    pub fn set_number_decimal_digits(&mut self, value: u32) -> Result<()> {
        check_decimal_digits("number_decimal_digits", value)?;
        self.number_decimal_digits = value;
        Ok(())
    }

    /// Decimal separator in plain numeric values. Defaults to `"."`.
    pub fn number_decimal_separator(&self) -> &str {
        &self.number_decimal_separator
    }

    pub fn set_number_decimal_separator(&mut self, value: &str) -> Result<()> {
        check_not_empty("number_decimal_separator", value)?;
        self.number_decimal_separator = value.to_string();
        Ok(())
    }

    /// Separator between digit groups in plain numeric values. Defaults to `","`.
    pub fn number_group_separator(&self) -> &str {
        &self.number_group_separator
    }

    pub fn set_number_group_separator(&mut self, value: &str) -> Result<()> {
        self.number_group_separator = value.to_string();
        Ok(())
    }

    /// Digit group sizes in plain numeric values. Defaults to `[3]`.
    pub fn number_group_sizes(&self) -> &[u8] {
        &self.number_group_sizes
    }

    pub fn set_number_group_sizes(&mut self, sizes: &[u8]) -> Result<()> {
        check_group_sizes("number_group_sizes", sizes)?;
        self.number_group_sizes = sizes.to_vec();
        Ok(())
    }

    /// Layout index for negative numeric values, 0 through 4. Defaults to 1.
    pub fn number_negative_pattern(&self) -> u8 {
        self.number_negative_pattern
    }

    pub fn set_number_negative_pattern(&mut self, value: u8) -> Result<()> {
        check_pattern("number_negative_pattern", value, 4)?;
        self.number_negative_pattern = value;
        Ok(())
    }

    /// Number of decimal places in percent values. Defaults to 2.
    pub fn percent_decimal_digits(&self) -> u32 {
        self.percent_decimal_digits
    }

    pub fn set_percent_decimal_digits(&mut self, value: u32) -> Result<()> {
        check_decimal_digits("percent_decimal_digits", value)?;
        self.percent_decimal_digits = value;
        Ok(())
    }

    /// Decimal separator in percent values. Defaults to `"."`.
    pub fn percent_decimal_separator(&self) -> &str {
        &self.percent_decimal_separator
    }

    pub fn set_percent_decimal_separator(&mut self, value: &str) -> Result<()> {
        check_not_empty("percent_decimal_separator", value)?;
        self.percent_decimal_separator = value.to_string();
        Ok(())
    }

    /// Separator between digit groups in percent values. Defaults to `","`.
    pub fn percent_group_separator(&self) -> &str {
        &self.percent_group_separator
    }

    pub fn set_percent_group_separator(&mut self, value: &str) -> Result<()> {
        self.percent_group_separator = value.to_string();
        Ok(())
    }

    /// Digit group sizes in percent values. Defaults to `[3]`.
    pub fn percent_group_sizes(&self) -> &[u8] {
        &self.percent_group_sizes
    }

    pub fn set_percent_group_sizes(&mut self, sizes: &[u8]) -> Result<()> {
        check_group_sizes("percent_group_sizes", sizes)?;
        self.percent_group_sizes = sizes.to_vec();
        Ok(())
    }

    /// Layout index for negative percent values, 0 through 11. Defaults to 1.
    pub fn percent_negative_pattern(&self) -> u8 {
        self.percent_negative_pattern
    }

    pub fn set_percent_negative_pattern(&mut self, value: u8) -> Result<()> {
        check_pattern("percent_negative_pattern", value, 11)?;
        self.percent_negative_pattern = value;
        Ok(())
    }

    /// Layout index for positive percent values, 0 through 3. Defaults to 1.
    pub fn percent_positive_pattern(&self) -> u8 {
        self.percent_positive_pattern
    }

    pub fn set_percent_positive_pattern(&mut self, value: u8) -> Result<()> {
        check_pattern("percent_positive_pattern", value, 3)?;
        self.percent_positive_pattern = value;
        Ok(())
    }

    /// Percent symbol. Defaults to `"%"`.
    pub fn percent_symbol(&self) -> &str {
        &self.percent_symbol
    }

    pub fn set_percent_symbol(&mut self, value: &str) -> Result<()> {
        check_not_empty("percent_symbol", value)?;
        self.percent_symbol = value.to_string();
        Ok(())
    }

    /// String that marks negative values. Defaults to `"-"`.
    pub fn negative_sign(&self) -> &str {
        &self.negative_sign
    }

    pub fn set_negative_sign(&mut self, value: &str) -> Result<()> {
        check_not_empty("negative_sign", value)?;
        self.negative_sign = value.to_string();
        Ok(())
    }

    /// Literal rendered for NaN. Defaults to `"NaN"`.
    pub fn nan_symbol(&self) -> &str {
        &self.nan_symbol
    }

    pub fn set_nan_symbol(&mut self, value: &str) -> Result<()> {
        check_not_empty("nan_symbol", value)?;
        self.nan_symbol = value.to_string();
        Ok(())
    }

    /// Literal rendered for positive infinity. Defaults to `"Infinity"`.
    pub fn positive_infinity_symbol(&self) -> &str {
        &self.positive_infinity_symbol
    }

    pub fn set_positive_infinity_symbol(&mut self, value: &str) -> Result<()> {
        check_not_empty("positive_infinity_symbol", value)?;
        self.positive_infinity_symbol = value.to_string();
        Ok(())
    }

    /// Literal rendered for negative infinity. Defaults to `"-Infinity"`.
    pub fn negative_infinity_symbol(&self) -> &str {
        &self.negative_infinity_symbol
    }

    pub fn set_negative_infinity_symbol(&mut self, value: &str) -> Result<()> {
        check_not_empty("negative_infinity_symbol", value)?;
        self.negative_infinity_symbol = value.to_string();
        Ok(())
    }

    /// Build a configuration from a TOML table
    ///
    /// Starts from the defaults and funnels every recognized key through the
    /// matching validated setter, so out-of-domain values are rejected the
    /// same way as programmatic assignment. Unknown keys are ignored.
    ///
    /// # Examples
    /// ```
    /// use numfmt_standard::FormatConfig;
    ///
    /// let config = FormatConfig::from_toml_str(
    ///     r#"
    ///     number_decimal_separator = ","
    ///     number_group_separator = "."
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.number_decimal_separator(), ",");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed: toml::Value =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let table = parsed
            .as_table()
            .ok_or_else(|| ConfigError::Parse("root is not a table".to_string()))?;

        let mut config = Self::default();

        if let Some(value) = table.get("currency_decimal_digits") {
            config.set_currency_decimal_digits(read_u32(value, "currency_decimal_digits")?)?;
        }
        if let Some(value) = table.get("currency_decimal_separator") {
            config.set_currency_decimal_separator(read_str(value, "currency_decimal_separator")?)?;
        }
        if let Some(value) = table.get("currency_group_separator") {
            config.set_currency_group_separator(read_str(value, "currency_group_separator")?)?;
        }
        if let Some(value) = table.get("currency_group_sizes") {
            config.set_currency_group_sizes(&read_sizes(value, "currency_group_sizes")?)?;
        }
        if let Some(value) = table.get("currency_negative_pattern") {
            config.set_currency_negative_pattern(read_u8(value, "currency_negative_pattern")?)?;
        }
        if let Some(value) = table.get("currency_positive_pattern") {
            config.set_currency_positive_pattern(read_u8(value, "currency_positive_pattern")?)?;
        }
        if let Some(value) = table.get("currency_symbol") {
            config.set_currency_symbol(read_str(value, "currency_symbol")?);
        }
        if let Some(value) = table.get("number_decimal_digits") {
            config.set_number_decimal_digits(read_u32(value, "number_decimal_digits")?)?;
        }
        if let Some(value) = table.get("number_decimal_separator") {
            config.set_number_decimal_separator(read_str(value, "number_decimal_separator")?)?;
        }
        if let Some(value) = table.get("number_group_separator") {
            config.set_number_group_separator(read_str(value, "number_group_separator")?)?;
        }
        if let Some(value) = table.get("number_group_sizes") {
            config.set_number_group_sizes(&read_sizes(value, "number_group_sizes")?)?;
        }
        if let Some(value) = table.get("number_negative_pattern") {
            config.set_number_negative_pattern(read_u8(value, "number_negative_pattern")?)?;
        }
        if let Some(value) = table.get("percent_decimal_digits") {
            config.set_percent_decimal_digits(read_u32(value, "percent_decimal_digits")?)?;
        }
        if let Some(value) = table.get("percent_decimal_separator") {
            config.set_percent_decimal_separator(read_str(value, "percent_decimal_separator")?)?;
        }
        if let Some(value) = table.get("percent_group_separator") {
            config.set_percent_group_separator(read_str(value, "percent_group_separator")?)?;
        }
        if let Some(value) = table.get("percent_group_sizes") {
            config.set_percent_group_sizes(&read_sizes(value, "percent_group_sizes")?)?;
        }
        if let Some(value) = table.get("percent_negative_pattern") {
            config.set_percent_negative_pattern(read_u8(value, "percent_negative_pattern")?)?;
        }
        if let Some(value) = table.get("percent_positive_pattern") {
            config.set_percent_positive_pattern(read_u8(value, "percent_positive_pattern")?)?;
        }
        if let Some(value) = table.get("percent_symbol") {
            config.set_percent_symbol(read_str(value, "percent_symbol")?)?;
        }
        if let Some(value) = table.get("negative_sign") {
            config.set_negative_sign(read_str(value, "negative_sign")?)?;
        }
        if let Some(value) = table.get("nan_symbol") {
            config.set_nan_symbol(read_str(value, "nan_symbol")?)?;
        }
        if let Some(value) = table.get("positive_infinity_symbol") {
            config.set_positive_infinity_symbol(read_str(value, "positive_infinity_symbol")?)?;
        }
        if let Some(value) = table.get("negative_infinity_symbol") {
            config.set_negative_infinity_symbol(read_str(value, "negative_infinity_symbol")?)?;
        }

        Ok(config)
    }
}

fn check_decimal_digits(field: &str, value: u32) -> Result<()> {
    if value > 99 {
        return Err(ConfigError::OutOfRange(format!(
            "{field} must be between 0 and 99, got {value}"
        )));
    }
    Ok(())
}

fn check_pattern(field: &str, value: u8, max: u8) -> Result<()> {
    if value > max {
        return Err(ConfigError::OutOfRange(format!(
            "{field} must be between 0 and {max}, got {value}"
        )));
    }
    Ok(())
}

fn check_not_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(format!("{field} must not be empty")));
    }
    Ok(())
}

/// A zero size ends grouping, so it may only appear as the last element.
/// Each element is checked on its own; the whole assignment is rejected on
/// the first bad element.
fn check_group_sizes(field: &str, sizes: &[u8]) -> Result<()> {
    let mut zero_seen = false;
    for &size in sizes {
        if zero_seen {
            return Err(ConfigError::GroupAfterZero(format!(
                "{field} may contain 0 only as the last element"
            )));
        }
        if size > 9 {
            return Err(ConfigError::OutOfRange(format!(
                "each element of {field} must be between 0 and 9, got {size}"
            )));
        }
        if size == 0 {
            zero_seen = true;
        }
    }
    Ok(())
}

fn read_u32(value: &toml::Value, field: &str) -> Result<u32> {
    value
        .as_integer()
        .and_then(|i| u32::try_from(i).ok())
        .ok_or_else(|| ConfigError::Parse(format!("{field} must be a non-negative integer")))
}

fn read_u8(value: &toml::Value, field: &str) -> Result<u8> {
    value
        .as_integer()
        .and_then(|i| u8::try_from(i).ok())
        .ok_or_else(|| ConfigError::Parse(format!("{field} must be a small non-negative integer")))
}

fn read_str<'v>(value: &'v toml::Value, field: &str) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::Parse(format!("{field} must be a string")))
}

fn read_sizes(value: &toml::Value, field: &str) -> Result<Vec<u8>> {
    let array = value
        .as_array()
        .ok_or_else(|| ConfigError::Parse(format!("{field} must be an array of integers")))?;
    array
        .iter()
        .map(|element| read_u8(element, field))
        .collect()
}
