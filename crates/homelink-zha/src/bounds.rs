//! Advisory bounds of numeric attributes.
//!
//! Bounds are metadata shown by the host UI. Writes are not clamped to them;
//! the device decides what it accepts.

use homelink_core::config::analog_output;
use serde::{Deserialize, Serialize};

/// Where the host lists an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// User-adjustable configuration.
    Config,
    /// Read-only diagnostic value.
    Diagnostic,
}

/// Errors from bounds validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundsError {
    #[error("min {min} exceeds max {max} for attribute {attribute}")]
    InvertedRange { attribute: String, min: f64, max: f64 },

    #[error("step {step} must be positive for attribute {attribute}")]
    NonPositiveStep { attribute: String, step: f64 },
}

/// Static bounds declaration for one attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeBounds {
    pub attribute: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub category: EntityCategory,
}

impl AttributeBounds {
    /// Configuration bounds with the usual step of one.
    pub const fn config(attribute: &'static str, min: f64, max: f64) -> Self {
        Self {
            attribute,
            min,
            max,
            step: 1.0,
            category: EntityCategory::Config,
        }
    }

    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub const fn with_category(mut self, category: EntityCategory) -> Self {
        self.category = category;
        self
    }

    pub fn validate(&self) -> Result<(), BoundsError> {
        if self.min > self.max {
            return Err(BoundsError::InvertedRange {
                attribute: self.attribute.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        if !(self.step > 0.0) {
            return Err(BoundsError::NonPositiveStep {
                attribute: self.attribute.to_string(),
                step: self.step,
            });
        }
        Ok(())
    }

    pub fn range(&self) -> Range {
        Range {
            min: self.min,
            max: self.max,
            step: self.step,
        }
    }

    /// Whether `value` lies within `[min, max]`. Informational only.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Effective min/max/step presented to the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Range {
    /// Resolve analog output bounds from what the device reports.
    ///
    /// Each bound falls back on its own: a missing minimum becomes 0, a
    /// missing maximum becomes 1023 and a missing resolution becomes the
    /// platform step.
    pub fn analog_output(
        min_present_value: Option<f64>,
        max_present_value: Option<f64>,
        resolution: Option<f64>,
        platform_step: f64,
    ) -> Self {
        Self {
            min: min_present_value.unwrap_or(analog_output::DEFAULT_MIN),
            max: max_present_value.unwrap_or(analog_output::DEFAULT_MAX),
            step: resolution.unwrap_or(platform_step),
        }
    }
}
