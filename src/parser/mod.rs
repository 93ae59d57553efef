//! Quantity text parsing module
//!
//! This module is responsible for recognizing quantity text ("3", "1.5", "1/2", "1 1/2")
//! and converting it into a `FractionText`. Validation and decimal conversion both go
//! through this one grammar. The main entry point is the `parse_quantity` function.

mod tokens;
mod combinators;
mod quantity;

pub use quantity::parse_quantity;
