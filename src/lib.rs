pub mod codec;
pub mod common;
pub mod error;
pub mod parser;
pub mod settings;
pub mod types;

// 导出主要 API
pub use codec::{decimal_to_fraction, fraction_to_decimal, validate};
pub use error::QuantityError;
pub use parser::parse_quantity;
pub use settings::CodecSettings;
pub use types::*;

#[cfg(test)]
mod tests;
