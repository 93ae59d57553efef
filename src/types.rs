//! Type definitions for quantity text
//!
//! This module defines the values the parser produces and the codec consumes:
//! the authoritative decimal amount and the shapes a quantity can be written in.

use std::fmt;

use crate::error::{QuantityError, Result};

/// Authoritative amount of an ingredient. Never negative.
pub type Quantity = f64;

/// A quantity as a person writes it
#[derive(Debug, Clone, PartialEq)]
pub enum FractionText {
    /// Bare integer, e.g. "3"
    Whole(u64),
    /// Decimal numeral with a fractional part, e.g. "1.5" or ".75"
    Decimal(f64),
    /// Bare fraction, e.g. "1/2"
    Simple { numerator: u64, denominator: u64 },
    /// Whole number and fraction separated by one space, e.g. "1 1/2"
    Mixed {
        whole: u64,
        numerator: u64,
        denominator: u64,
    },
}

impl FractionText {
    /// Evaluates the text to its decimal amount
    pub fn to_decimal(&self) -> Result<Quantity> {
        match *self {
            FractionText::Whole(whole) => Ok(whole as f64),
            FractionText::Decimal(value) => Ok(value),
            FractionText::Simple {
                numerator,
                denominator,
            } => ratio(numerator, denominator, self),
            FractionText::Mixed {
                whole,
                numerator,
                denominator,
            } => Ok(whole as f64 + ratio(numerator, denominator, self)?),
        }
    }

    /// Returns true if the text carries a `/` part
    pub fn is_fraction(&self) -> bool {
        matches!(
            self,
            FractionText::Simple { .. } | FractionText::Mixed { .. }
        )
    }
}

fn ratio(numerator: u64, denominator: u64, text: &FractionText) -> Result<f64> {
    if denominator == 0 {
        return Err(QuantityError::ZeroDenominator {
            input: text.to_string(),
        });
    }
    Ok(numerator as f64 / denominator as f64)
}

impl fmt::Display for FractionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionText::Whole(whole) => write!(f, "{}", whole),
            FractionText::Decimal(value) => write!(f, "{}", value),
            FractionText::Simple {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            FractionText::Mixed {
                whole,
                numerator,
                denominator,
            } => write!(f, "{} {}/{}", whole, numerator, denominator),
        }
    }
}

/// One rational approximation produced by continued-fraction expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convergent {
    /// Numerator, already in lowest terms
    pub numerator: u64,
    /// Denominator, already in lowest terms and never zero
    pub denominator: u64,
    /// Number of expansion steps performed to reach it
    pub steps: u32,
}

impl Convergent {
    /// The convergent as a decimal
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}
