//! Error type shared by the parser and the codec

/// Errors produced while parsing or converting quantities
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// The text does not match the quantity grammar
    #[error("invalid quantity format: '{input}'")]
    Format { input: String },
    /// The fraction has a zero denominator
    #[error("zero denominator in '{input}'")]
    ZeroDenominator { input: String },
    /// An integer part does not fit in 64 bits
    #[error("number too large in '{input}'")]
    Overflow { input: String },
    /// Quantities are never negative
    #[error("negative quantity: {0}")]
    Negative(f64),
    /// NaN or infinite values cannot be rendered
    #[error("non-finite quantity: {0}")]
    NonFinite(f64),
    /// Codec settings are out of range or malformed
    #[error("invalid codec settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, QuantityError>;
