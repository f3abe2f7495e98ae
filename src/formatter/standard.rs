//! Renderers for the six standard specifiers
//!
//! Each renderer receives the raw value, the explicit precision (if any)
//! and the bound configuration, and produces the final string. The sign of
//! the output follows the sign of the input value; negative zero renders
//! unsigned.

use std::fmt::Write;

use crate::config::FormatConfig;
use crate::formatter::{digits, patterns};
use crate::types::FormatError;

pub(super) fn currency(value: f64, precision: Option<u32>, config: &FormatConfig) -> String {
    let places = precision.unwrap_or(config.currency_decimal_digits()) as usize;
    let (int_digits, frac) = digits::split_rounded(value.abs(), places);
    let grouped = digits::group(
        &int_digits,
        config.currency_group_sizes(),
        config.currency_group_separator(),
    );
    let magnitude = digits::with_fraction(grouped, &frac, config.currency_decimal_separator());
    if value < 0.0 {
        patterns::currency_negative(&magnitude, config)
    } else {
        patterns::currency_positive(&magnitude, config)
    }
}

pub(super) fn fixed_point(value: f64, precision: Option<u32>, config: &FormatConfig) -> String {
    let places = precision.unwrap_or(config.number_decimal_digits()) as usize;
    let (int_digits, frac) = digits::split_rounded(value.abs(), places);
    let magnitude = digits::with_fraction(int_digits, &frac, config.number_decimal_separator());
    if value < 0.0 {
        format!("{}{}", config.negative_sign(), magnitude)
    } else {
        magnitude
    }
}

pub(super) fn number(value: f64, precision: Option<u32>, config: &FormatConfig) -> String {
    let places = precision.unwrap_or(config.number_decimal_digits()) as usize;
    let (int_digits, frac) = digits::split_rounded(value.abs(), places);
    let grouped = digits::group(
        &int_digits,
        config.number_group_sizes(),
        config.number_group_separator(),
    );
    let magnitude = digits::with_fraction(grouped, &frac, config.number_decimal_separator());
    if value < 0.0 {
        patterns::number_negative(&magnitude, config)
    } else {
        magnitude
    }
}

pub(super) fn percent(value: f64, precision: Option<u32>, config: &FormatConfig) -> String {
    let places = precision.unwrap_or(config.percent_decimal_digits()) as usize;
    let (int_digits, frac) = digits::split_rounded(value.abs() * 100.0, places);
    let grouped = digits::group(
        &int_digits,
        config.percent_group_sizes(),
        config.percent_group_separator(),
    );
    let magnitude = digits::with_fraction(grouped, &frac, config.percent_decimal_separator());
    if value < 0.0 {
        patterns::percent_negative(&magnitude, config)
    } else {
        patterns::percent_positive(&magnitude, config)
    }
}

/// The D specifier accepts integral values only; precision is a minimum
/// digit count, filled with leading zeros.
pub(super) fn decimal(
    value: f64,
    precision: Option<u32>,
    config: &FormatConfig,
) -> Result<String, FormatError> {
    if value.fract() != 0.0 {
        return Err(FormatError::NotAnInteger(value));
    }

    let mut digit_str = format!("{:.0}", value.abs());
    if let Some(width) = precision {
        let width = width as usize;
        if digit_str.len() < width {
            let mut padded = "0".repeat(width - digit_str.len());
            padded.push_str(&digit_str);
            digit_str = padded;
        }
    }

    Ok(if value < 0.0 {
        format!("{}{}", config.negative_sign(), digit_str)
    } else {
        digit_str
    })
}

/// The G specifier: shortest round-trip digits by default, or the given
/// number of significant digits. Fixed-point layout while the decimal
/// exponent is greater than -5 and below the precision, scientific
/// otherwise.
pub(super) fn general(value: f64, precision: Option<u32>, config: &FormatConfig) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 {
        config.negative_sign()
    } else {
        ""
    };

    if abs == 0.0 {
        return format!("{sign}0");
    }

    // G0 behaves like plain G.
    let significant = precision.filter(|p| *p > 0);
    let (digit_str, exponent) = digits::sci_parts(abs, significant);

    let threshold = significant.map_or(15, |p| p as i32);
    if exponent <= -5 || exponent >= threshold {
        let mut result = format!("{sign}{}", &digit_str[..1]);
        let mantissa_frac = digit_str[1..].trim_end_matches('0');
        if !mantissa_frac.is_empty() {
            result.push_str(config.number_decimal_separator());
            result.push_str(mantissa_frac);
        }
        let exp_sign = if exponent < 0 { "-" } else { "+" };
        write!(result, "E{exp_sign}{:02}", exponent.abs()).expect("write to string");
        result
    } else {
        format!(
            "{sign}{}",
            digits::positional(&digit_str, exponent, config.number_decimal_separator())
        )
    }
}
