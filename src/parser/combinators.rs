use winnow::combinator::{alt, eof, opt, separated_pair, terminated};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;

/// Digit slices recognized by the grammar, before any numeric conversion
#[derive(Debug, Clone, PartialEq)]
pub enum RawQuantity<'s> {
    Numeral(&'s str),
    Fraction {
        whole: Option<&'s str>,
        numerator: &'s str,
        denominator: &'s str,
    },
}

/// Parse a simple or mixed fraction: `[digits " "] digits "/" digits`
pub fn parse_fraction<'s>(input: &mut &'s str) -> ModalResult<RawQuantity<'s>> {
    (
        opt(terminated(parse_digits, parse_separator)),
        separated_pair(parse_digits, parse_slash, parse_digits),
    )
        .map(|(whole, (numerator, denominator))| RawQuantity::Fraction {
            whole,
            numerator,
            denominator,
        })
        .parse_next(input)
}

/// Parse a complete quantity; the whole input must be consumed
pub fn parse_raw_quantity<'s>(input: &mut &'s str) -> ModalResult<RawQuantity<'s>> {
    alt((
        terminated(parse_fraction, eof),
        terminated(parse_decimal_numeral.map(RawQuantity::Numeral), eof),
    ))
    .parse_next(input)
}
