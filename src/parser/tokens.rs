use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

/// A run of ASCII digits
pub fn parse_digits<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    digit1.parse_next(input)
}

/// Base-10 numeral with an optional fractional part: "3", "1.5", "2.", ".75"
pub fn parse_decimal_numeral<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    alt((
        (digit1, opt((literal("."), digit0))).take(),
        (literal("."), digit1).take(),
    ))
    .parse_next(input)
}

pub fn parse_slash(input: &mut &str) -> ModalResult<()> {
    literal("/").void().parse_next(input)
}

// Exactly one space separates the whole part from the fraction
pub fn parse_separator(input: &mut &str) -> ModalResult<()> {
    literal(" ").void().parse_next(input)
}
