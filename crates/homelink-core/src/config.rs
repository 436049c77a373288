//! Configuration defaults shared by the integrations.
//!
//! Constants live in small modules so callers can name exactly the default
//! they depend on. `NumberDefaults` holds the host-platform step for
//! numeric entities and can be loaded from TOML or overridden from the
//! environment.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Host platform defaults for numeric entities.
pub mod number {
    /// Default step of a number entity.
    pub const DEFAULT_STEP: f64 = 1.0;
}

/// Fallback bounds for analog output attributes that report no range.
pub mod analog_output {
    /// Used when the device reports no minimum present value.
    pub const DEFAULT_MIN: f64 = 0.0;
    /// Used when the device reports no maximum present value.
    pub const DEFAULT_MAX: f64 = 1023.0;
}

/// Environment variable names.
pub mod env_vars {
    pub const NUMBER_DEFAULT_STEP: &str = "HOMELINK_NUMBER_DEFAULT_STEP";
    pub const LOG_JSON: &str = "HOMELINK_LOG_JSON";
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

fn default_step() -> f64 {
    number::DEFAULT_STEP
}

/// Host defaults applied to number entities whose device reports nothing
/// more specific.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberDefaults {
    /// Step used when an analog output reports no resolution.
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for NumberDefaults {
    fn default() -> Self {
        Self {
            step: number::DEFAULT_STEP,
        }
    }
}

impl NumberDefaults {
    /// Parse defaults from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let defaults: Self = toml::from_str(s)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Defaults with the `HOMELINK_NUMBER_DEFAULT_STEP` override applied.
    ///
    /// Unparseable or invalid values are ignored.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(step) = env_f64(env_vars::NUMBER_DEFAULT_STEP) {
            if step > 0.0 {
                self.step = step;
            } else {
                tracing::warn!(
                    "Ignoring {}={}: step must be positive",
                    env_vars::NUMBER_DEFAULT_STEP,
                    step
                );
            }
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step > 0.0) {
            return Err(Error::Validation(format!(
                "default step must be positive, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = NumberDefaults::default();
        assert_eq!(defaults.step, 1.0);
        assert!(defaults.validate().is_ok());
    }

    #[test]
    fn test_from_toml_empty_keeps_default() {
        let defaults = NumberDefaults::from_toml_str("").unwrap();
        assert_eq!(defaults.step, number::DEFAULT_STEP);
    }

    #[test]
    fn test_from_toml_step() {
        let defaults = NumberDefaults::from_toml_str("step = 0.5").unwrap();
        assert_eq!(defaults.step, 0.5);
    }

    #[test]
    fn test_from_toml_rejects_zero_step() {
        let err = NumberDefaults::from_toml_str("step = 0.0").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let err = NumberDefaults::from_toml_str("step = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
