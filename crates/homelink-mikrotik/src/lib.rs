//! Mikrotik router integration.
//!
//! Holds the constants, connection settings and RouterOS endpoint map used
//! to track clients of a Mikrotik router.

pub mod config;
pub mod constants;
pub mod info;
pub mod service;

pub use config::MikrotikConfig;
pub use info::{device_tracker_attributes, RouterInfo};
pub use service::MikrotikService;
