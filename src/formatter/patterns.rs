//! Canonical sign and symbol layouts
//!
//! Each function places an unsigned magnitude string into the layout
//! selected by the matching pattern index on the configuration.

use crate::config::FormatConfig;

pub(super) fn currency_positive(n: &str, config: &FormatConfig) -> String {
    let symbol = config.currency_symbol();
    match config.currency_positive_pattern() {
        0 => format!("{symbol}{n}"),
        1 => format!("{n}{symbol}"),
        2 => format!("{symbol} {n}"),
        _ => format!("{n} {symbol}"),
    }
}

pub(super) fn currency_negative(n: &str, config: &FormatConfig) -> String {
    let symbol = config.currency_symbol();
    let sign = config.negative_sign();
    match config.currency_negative_pattern() {
        0 => format!("({symbol}{n})"),
        1 => format!("{sign}{symbol}{n}"),
        2 => format!("{symbol}{sign}{n}"),
        3 => format!("{symbol}{n}{sign}"),
        4 => format!("({n}{symbol})"),
        5 => format!("{sign}{n}{symbol}"),
        6 => format!("{n}{sign}{symbol}"),
        7 => format!("{n}{symbol}{sign}"),
        8 => format!("{sign}{n} {symbol}"),
        9 => format!("{sign}{symbol} {n}"),
        10 => format!("{n} {symbol}{sign}"),
        11 => format!("{symbol} {n}{sign}"),
        12 => format!("{symbol} {sign}{n}"),
        13 => format!("{n}{sign} {symbol}"),
        14 => format!("({symbol} {n})"),
        _ => format!("({n} {symbol})"),
    }
}

pub(super) fn number_negative(n: &str, config: &FormatConfig) -> String {
    let sign = config.negative_sign();
    match config.number_negative_pattern() {
        0 => format!("({n})"),
        1 => format!("{sign}{n}"),
        2 => format!("{sign} {n}"),
        3 => format!("{n}{sign}"),
        _ => format!("{n} {sign}"),
    }
}

pub(super) fn percent_positive(n: &str, config: &FormatConfig) -> String {
    let symbol = config.percent_symbol();
    match config.percent_positive_pattern() {
        0 => format!("{n} {symbol}"),
        1 => format!("{n}{symbol}"),
        2 => format!("{symbol}{n}"),
        _ => format!("{symbol} {n}"),
    }
}

pub(super) fn percent_negative(n: &str, config: &FormatConfig) -> String {
    let symbol = config.percent_symbol();
    let sign = config.negative_sign();
    match config.percent_negative_pattern() {
        0 => format!("{sign}{n} {symbol}"),
        1 => format!("{sign}{n}{symbol}"),
        2 => format!("{sign}{symbol}{n}"),
        3 => format!("{symbol}{sign}{n}"),
        4 => format!("{symbol}{n}{sign}"),
        5 => format!("{n}{sign}{symbol}"),
        6 => format!("{n}{symbol}{sign}"),
        7 => format!("{sign}{symbol} {n}"),
        8 => format!("{n} {symbol}{sign}"),
        9 => format!("{symbol} {n}{sign}"),
        10 => format!("{symbol} {sign}{n}"),
        _ => format!("{n}{sign} {symbol}"),
    }
}
