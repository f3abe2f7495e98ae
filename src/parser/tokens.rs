use winnow::ascii::{Caseless, digit1};
use winnow::combinator::alt;
use winnow::error::ErrMode;
use winnow::token::literal;
use winnow::{ModalResult, Parser};

use crate::types::Specifier;

// Specifier letter parsers, all case-insensitive

pub fn parse_currency(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("C"))
        .value(Specifier::Currency)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_fixed_point(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("F"))
        .value(Specifier::FixedPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_number(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("N"))
        .value(Specifier::Number)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_percent(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("P"))
        .value(Specifier::Percent)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("D"))
        .value(Specifier::Decimal)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_general(input: &mut &str) -> ModalResult<Specifier> {
    literal(Caseless("G"))
        .value(Specifier::General)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse any recognized specifier letter
pub fn parse_specifier(input: &mut &str) -> ModalResult<Specifier> {
    alt((
        parse_currency,
        parse_fixed_point,
        parse_number,
        parse_percent,
        parse_decimal,
        parse_general,
    ))
    .parse_next(input)
}

/// Parse the decimal digits of an explicit precision
pub fn parse_precision(input: &mut &str) -> ModalResult<u32> {
    digit1
        .try_map(str::parse::<u32>)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
