//! Common cooking fractions
//!
//! Stored amounts are often rounded decimals ("0.33" for a third). This module maps those
//! familiar amounts to the fraction a cook expects to read, using a table embedded at
//! build time.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::warn;

use crate::error::{QuantityError, Result};
use crate::types::Quantity;

/// Lookup table keyed by amount in hundredths
struct CommonFractionTable {
    fractions: BTreeMap<u64, String>,
}

// Global singleton for the embedded table
static COMMON_FRACTIONS: OnceLock<CommonFractionTable> = OnceLock::new();

impl CommonFractionTable {
    fn new() -> Self {
        let mut table = Self {
            fractions: BTreeMap::new(),
        };

        if let Err(e) = table.load_embedded_data() {
            // Keep going with an empty table; lookups just miss
            warn!("Failed to load embedded common fractions: {}", e);
        }

        table
    }

    fn get() -> &'static Self {
        COMMON_FRACTIONS.get_or_init(Self::new)
    }

    fn load_embedded_data(&mut self) -> Result<()> {
        let fractions_toml = include_str!("common/common_fractions.toml");
        self.parse_fractions(fractions_toml)
    }

    fn parse_fractions(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| table_error(e.to_string()))?;

        let fractions = parsed_toml
            .get("fractions")
            .and_then(|v| v.as_table())
            .ok_or_else(|| table_error("Missing [fractions] table".to_string()))?;

        for (key, value) in fractions {
            let amount = key
                .parse::<f64>()
                .ok()
                .and_then(to_hundredths)
                .ok_or_else(|| table_error(format!("Invalid amount key {}", key)))?;

            let text = value
                .as_str()
                .ok_or_else(|| table_error(format!("Value for {} is not a string", key)))?;

            self.fractions.insert(amount, text.to_string());
        }

        Ok(())
    }
}

fn table_error(msg: String) -> QuantityError {
    QuantityError::InvalidSettings(format!("common fraction table: {}", msg))
}

fn to_hundredths(value: Quantity) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * 100.0).round() as u64)
}

/// Get the familiar fraction text for an amount, if it is a common one
///
/// The amount is rounded to hundredths before lookup, so `0.333` finds "1/3".
pub fn common_fraction(value: Quantity) -> Option<&'static str> {
    let key = to_hundredths(value)?;
    CommonFractionTable::get()
        .fractions
        .get(&key)
        .map(String::as_str)
}

/// List all common fractions as `(amount, text)`, smallest amount first
pub fn common_fractions() -> Vec<(Quantity, &'static str)> {
    CommonFractionTable::get()
        .fractions
        .iter()
        .map(|(hundredths, text)| (*hundredths as f64 / 100.0, text.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::fraction_to_decimal;

    #[test]
    fn test_table_loading() {
        let fractions = common_fractions();
        assert_eq!(fractions.len(), 15);
        assert_eq!(fractions[0], (0.25, "1/4"));
        assert!(fractions.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(common_fraction(0.5), Some("1/2"));
        assert_eq!(common_fraction(0.33), Some("1/3"));
        assert_eq!(common_fraction(0.333), Some("1/3"));
        assert_eq!(common_fraction(2.67), Some("2 2/3"));
        assert_eq!(common_fraction(0.1), None);
        assert_eq!(common_fraction(-0.5), None);
        assert_eq!(common_fraction(f64::NAN), None);
    }

    #[test]
    fn test_entries_are_valid_and_close() {
        for (amount, text) in common_fractions() {
            let decoded = fraction_to_decimal(text).unwrap();
            assert!(
                (decoded - amount).abs() < 0.01,
                "{} decodes to {}, expected about {}",
                text,
                decoded,
                amount
            );
        }
    }

    #[test]
    fn test_malformed_table() {
        let mut table = CommonFractionTable {
            fractions: BTreeMap::new(),
        };
        assert!(table.parse_fractions("[other]\nx = 1").is_err());
        assert!(table.parse_fractions("[fractions]\n\"half\" = \"1/2\"").is_err());
        assert!(table.parse_fractions("[fractions]\n\"0.5\" = 2").is_err());
    }
}
