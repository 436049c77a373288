//! Attribute channel - the device side of a number entity.
//!
//! A channel wraps one Zigbee cluster on one endpoint. The Zigbee stack owns
//! the transport; this crate only needs to probe the attribute cache, read,
//! write and listen for pushed attribute reports.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Native value of a device attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::String(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            Self::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// Numeric representation an attribute is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    Integer,
    Float,
}

impl NativeType {
    /// Convert a host-supplied number to the attribute's representation.
    ///
    /// Integers truncate toward zero. Returns `None` for NaN, infinity, or
    /// an integer outside the `i64` range.
    pub fn coerce(self, value: f64) -> Option<AttributeValue> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Integer => {
                let truncated = value.trunc();
                // i64::MAX as f64 rounds up to 2^63
                if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
                    return None;
                }
                Some(AttributeValue::Integer(truncated as i64))
            }
            Self::Float => Some(AttributeValue::Float(value)),
        }
    }
}

/// ZCL foundation status of a single write record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Success,
    Failure,
    NotAuthorized,
    UnsupportedAttribute,
    InvalidValue,
    ReadOnly,
    InvalidDataType,
    Other(u8),
}

impl Status {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Success,
            0x01 => Self::Failure,
            0x7E => Self::NotAuthorized,
            0x86 => Self::UnsupportedAttribute,
            0x87 => Self::InvalidValue,
            0x88 => Self::ReadOnly,
            0x8D => Self::InvalidDataType,
            other => Self::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0x00,
            Self::Failure => 0x01,
            Self::NotAuthorized => 0x7E,
            Self::UnsupportedAttribute => 0x86,
            Self::InvalidValue => 0x87,
            Self::ReadOnly => 0x88,
            Self::InvalidDataType => 0x8D,
            Self::Other(code) => code,
        }
    }
}

/// Outcome of a write request that reached the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The device acknowledged the whole write.
    Success,
    /// The device answered with per-record statuses. Any non-success status
    /// means the write was not applied.
    PartialFailure(Vec<Status>),
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            Self::Success => true,
            Self::PartialFailure(records) => records.iter().all(|s| *s == Status::Success),
        }
    }
}

/// Transport-level failure reported by the Zigbee stack.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Request timed out")]
    Timeout,

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Device not reachable: {0}")]
    NotReachable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Attribute report pushed by the device.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeUpdate {
    pub attribute_id: u16,
    pub attribute: String,
    pub value: AttributeValue,
}

/// One cluster of one device endpoint, as seen by number entities.
#[async_trait]
pub trait AttributeChannel: Send + Sync {
    /// Channel name used for registry matching (e.g. `level`).
    fn name(&self) -> &str;

    /// Stable id of the channel, used as the prefix of entity unique ids.
    fn unique_id(&self) -> &str;

    /// Whether the device has told us it does not implement `attribute`.
    fn is_attribute_unsupported(&self, attribute: &str) -> bool;

    /// Last value the device reported for `attribute`, if any.
    fn cached_value(&self, attribute: &str) -> Option<AttributeValue>;

    /// Read `attribute` from the device, bypassing the cache.
    async fn read_attribute(&self, attribute: &str) -> Result<Option<AttributeValue>, ChannelError>;

    async fn write_attribute(
        &self,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<WriteOutcome, ChannelError>;

    /// Subscribe to attribute reports from this channel.
    fn subscribe(&self) -> broadcast::Receiver<AttributeUpdate>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion_truncates() {
        assert_eq!(NativeType::Integer.coerce(5.0), Some(AttributeValue::Integer(5)));
        assert_eq!(NativeType::Integer.coerce(5.9), Some(AttributeValue::Integer(5)));
        assert_eq!(NativeType::Integer.coerce(-2.7), Some(AttributeValue::Integer(-2)));
    }

    #[test]
    fn test_float_coercion_keeps_value() {
        assert_eq!(NativeType::Float.coerce(2.5), Some(AttributeValue::Float(2.5)));
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(NativeType::Integer.coerce(f64::NAN), None);
        assert_eq!(NativeType::Float.coerce(f64::INFINITY), None);
    }

    #[test]
    fn test_integer_out_of_range_is_rejected() {
        assert_eq!(NativeType::Integer.coerce(1e19), None);
        assert_eq!(NativeType::Integer.coerce(-1e19), None);
        assert_eq!(NativeType::Integer.coerce(9_223_372_036_854_775_807.0), None);
        assert_eq!(
            NativeType::Integer.coerce(-9_223_372_036_854_775_808.0),
            Some(AttributeValue::Integer(i64::MIN))
        );
        assert_eq!(NativeType::Float.coerce(1e19), Some(AttributeValue::Float(1e19)));
    }

    #[test]
    fn test_write_outcome_success() {
        assert!(WriteOutcome::Success.is_success());
        assert!(WriteOutcome::PartialFailure(vec![Status::Success, Status::Success]).is_success());
        assert!(!WriteOutcome::PartialFailure(vec![Status::Success, Status::ReadOnly]).is_success());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::from_code(0x87), Status::InvalidValue);
        assert_eq!(Status::from_code(0xC3), Status::Other(0xC3));
        assert_eq!(Status::ReadOnly.code(), 0x88);
    }

    #[test]
    fn test_attribute_value_accessors() {
        assert_eq!(AttributeValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(AttributeValue::Float(3.7).as_i64(), Some(3));
        assert_eq!(AttributeValue::from("hall").as_str(), Some("hall"));
        assert_eq!(AttributeValue::from("hall").as_f64(), None);
    }
}
