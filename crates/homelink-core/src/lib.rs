//! Core types shared by the homelink integrations.
//!
//! This crate carries the pieces every integration needs but none owns:
//! configuration defaults, the entity state bus, logging setup and the
//! common error type.

pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod logging;

pub use config::NumberDefaults;
pub use error::{Error, Result};
pub use event::{EntityEvent, EventMetadata};
pub use eventbus::{DEFAULT_CHANNEL_CAPACITY, FilteredReceiver, StateBus, StateBusReceiver};
