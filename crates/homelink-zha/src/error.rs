//! Write rejection reasons.

use crate::channel::{ChannelError, Status};

/// A value the device confirmed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Applied {
    /// The value after coercion to the attribute's native type.
    pub value: f64,
}

/// Why a write did not change the entity's value.
///
/// None of these are fatal; the host only learns that the value did not
/// change.
#[derive(Debug, thiserror::Error)]
pub enum Rejected {
    /// The Zigbee stack could not deliver the write.
    #[error("Could not set value: {0}")]
    Transport(#[from] ChannelError),

    /// The device answered but refused at least one record.
    #[error("Device rejected write: {0:?}")]
    PartialFailure(Vec<Status>),

    /// The requested value is NaN, infinite, or out of the attribute's
    /// native range.
    #[error("Value {0} cannot be written")]
    InvalidValue(f64),

    /// The entity is diagnostic only.
    #[error("Entity is read-only")]
    ReadOnly,

    /// The entity was torn down while the write was in flight.
    #[error("Entity removed before the write completed")]
    Removed,
}
