use winnow::Parser;

use crate::error::{QuantityError, Result};
use crate::parser::combinators::{RawQuantity, parse_raw_quantity};
use crate::types::FractionText;

/// Parse quantity text
///
/// This is the main public API entry point of this module. Surrounding whitespace is
/// ignored; the remainder must be a decimal numeral, a simple fraction, or a mixed number.
///
/// # Arguments
/// * `text` - The quantity text to parse
///
/// # Returns
/// * `Result<FractionText, QuantityError>` - The parsed quantity. A zero denominator is
///   rejected here so that every accepted text converts to a finite amount.
///
/// # Examples
/// ```
/// use quantity_format::parser::parse_quantity;
/// use quantity_format::FractionText;
///
/// let parsed = parse_quantity("1 1/2").unwrap();
/// assert_eq!(
///     parsed,
///     FractionText::Mixed { whole: 1, numerator: 1, denominator: 2 }
/// );
/// ```
pub fn parse_quantity(text: &str) -> Result<FractionText> {
    let mut input = text.trim();

    let raw = parse_raw_quantity
        .parse_next(&mut input)
        .map_err(|_| QuantityError::Format {
            input: text.to_string(),
        })?;

    match raw {
        RawQuantity::Numeral(numeral) => match numeral.parse::<u64>() {
            Ok(whole) => Ok(FractionText::Whole(whole)),
            // Has a decimal point, or is an integer wider than u64
            Err(_) => match numeral.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(FractionText::Decimal(value)),
                // Digit runs past f64 range parse to infinity
                Ok(_) => Err(QuantityError::Overflow {
                    input: text.to_string(),
                }),
                Err(_) => Err(QuantityError::Format {
                    input: text.to_string(),
                }),
            },
        },
        RawQuantity::Fraction {
            whole,
            numerator,
            denominator,
        } => {
            let numerator = parse_integer(numerator, text)?;
            let denominator = parse_integer(denominator, text)?;
            if denominator == 0 {
                return Err(QuantityError::ZeroDenominator {
                    input: text.to_string(),
                });
            }
            match whole {
                Some(whole) => Ok(FractionText::Mixed {
                    whole: parse_integer(whole, text)?,
                    numerator,
                    denominator,
                }),
                None => Ok(FractionText::Simple {
                    numerator,
                    denominator,
                }),
            }
        }
    }
}

// Fraction parts are ASCII digits, so overflow is the one failure left.
fn parse_integer(digits: &str, text: &str) -> Result<u64> {
    digits.parse::<u64>().map_err(|_| QuantityError::Overflow {
        input: text.to_string(),
    })
}
