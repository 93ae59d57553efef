//! Settings for decimal-to-fraction conversion
//!
//! The defaults suit cooking quantities. Callers that need a different precision can
//! build their own `CodecSettings` or load one from a TOML snippet.

use crate::error::{QuantityError, Result};

/// Default tolerance between an amount and its approximating fraction
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Default upper bound on continued-fraction expansion steps
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Tuning knobs for continued-fraction approximation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecSettings {
    /// Expansion stops once a convergent is within this distance of the target
    pub tolerance: f64,
    /// Hard bound on expansion steps, independent of input
    pub max_iterations: u32,
}

impl Default for CodecSettings {
    fn default() -> Self {
        CodecSettings {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl CodecSettings {
    /// Load settings from TOML. Missing keys keep their defaults.
    ///
    /// ```toml
    /// tolerance = 0.001
    /// max_iterations = 20
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value = toml::from_str(toml_str)
            .map_err(|e| QuantityError::InvalidSettings(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| QuantityError::InvalidSettings("Root is not a table".to_string()))?;

        let mut settings = CodecSettings::default();

        if let Some(value) = table.get("tolerance") {
            // Accept `tolerance = 1` as well as `tolerance = 1.0`
            settings.tolerance = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| {
                    QuantityError::InvalidSettings("tolerance must be a number".to_string())
                })?;
        }

        if let Some(value) = table.get("max_iterations") {
            let raw = value.as_integer().ok_or_else(|| {
                QuantityError::InvalidSettings("max_iterations must be an integer".to_string())
            })?;
            settings.max_iterations = u32::try_from(raw).map_err(|_| {
                QuantityError::InvalidSettings(format!("max_iterations out of range: {}", raw))
            })?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Checks that the settings can drive a terminating, meaningful expansion
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(QuantityError::InvalidSettings(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(QuantityError::InvalidSettings(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
