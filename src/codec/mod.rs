//! Conversions between quantity text and decimal amounts
//!
//! `validate` gates what a person types, `fraction_to_decimal` turns accepted text into the
//! stored amount, and `decimal_to_fraction` turns a stored amount back into editable text.
//! All three are pure and keep no state between calls.

pub mod continued_fraction;

use crate::error::{QuantityError, Result};
use crate::parser::parse_quantity;
use crate::settings::CodecSettings;
use crate::types::{FractionText, Quantity};

use continued_fraction::best_rational;

/// Returns true if `text` is a quantity the codec can convert.
///
/// Empty or whitespace-only text is rejected. Accepted text always converts with
/// `fraction_to_decimal` without error.
pub fn validate(text: &str) -> bool {
    !text.trim().is_empty() && parse_quantity(text).is_ok()
}

/// Converts quantity text ("1 1/2", "3/4", "2", "1.25") to a decimal amount.
///
/// Empty or whitespace-only text converts to `0.0`.
pub fn fraction_to_decimal(text: &str) -> Result<Quantity> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    parse_quantity(text)?.to_decimal()
}

/// Converts a decimal amount to its shortest fraction text using the default settings.
///
/// # Examples
/// ```
/// use quantity_format::decimal_to_fraction;
///
/// assert_eq!(decimal_to_fraction(1.5).unwrap(), "1 1/2");
/// assert_eq!(decimal_to_fraction(0.75).unwrap(), "3/4");
/// assert_eq!(decimal_to_fraction(3.0).unwrap(), "3");
/// ```
pub fn decimal_to_fraction(value: Quantity) -> Result<String> {
    decimal_to_fraction_with(value, &CodecSettings::default())
}

/// Converts a decimal amount to fraction text with custom approximation settings.
pub fn decimal_to_fraction_with(value: Quantity, settings: &CodecSettings) -> Result<String> {
    settings.validate()?;
    Ok(to_fraction_text(value, settings)?.to_string())
}

fn to_fraction_text(value: Quantity, settings: &CodecSettings) -> Result<FractionText> {
    if !value.is_finite() {
        return Err(QuantityError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(QuantityError::Negative(value));
    }
    if value.fract() == 0.0 {
        return Ok(whole_text(value));
    }

    // Non-integral finite values are below 2^52, so the cast is exact
    let whole = value.floor() as u64;
    let convergent = best_rational(value - value.floor(), settings);

    if convergent.numerator == 0 {
        return Ok(FractionText::Whole(whole));
    }
    if convergent.numerator == convergent.denominator {
        return Ok(FractionText::Whole(whole + 1));
    }

    if whole == 0 {
        Ok(FractionText::Simple {
            numerator: convergent.numerator,
            denominator: convergent.denominator,
        })
    } else {
        Ok(FractionText::Mixed {
            whole,
            numerator: convergent.numerator,
            denominator: convergent.denominator,
        })
    }
}

// Integral amounts past u64 keep every digit instead of saturating
fn whole_text(value: Quantity) -> FractionText {
    if value < u64::MAX as f64 {
        FractionText::Whole(value as u64)
    } else {
        FractionText::Decimal(value)
    }
}
