//! Router connection settings.

use std::time::Duration;

use homelink_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_PORT, DEFAULT_DETECTION_TIME, DEFAULT_NAME};

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_port() -> u16 {
    DEFAULT_API_PORT
}

fn default_detection_time() -> u64 {
    DEFAULT_DETECTION_TIME
}

/// Connection and tracking options for one router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MikrotikConfig {
    pub host: String,
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub verify_ssl: bool,
    /// Ping ARP entries before reporting them as home.
    #[serde(default)]
    pub arp_ping: bool,
    /// Track DHCP leases even when a wireless table is available.
    #[serde(default)]
    pub force_dhcp: bool,
    /// Seconds before an unseen client is marked away.
    #[serde(default = "default_detection_time")]
    pub detection_time: u64,
}

impl MikrotikConfig {
    pub fn new(host: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: String::new(),
            name: default_name(),
            port: DEFAULT_API_PORT,
            verify_ssl: false,
            arp_ping: false,
            force_dhcp: false,
            detection_time: DEFAULT_DETECTION_TIME,
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        tracing::debug!(host = %config.host, port = config.port, "loaded mikrotik config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Validation("mikrotik host must not be empty".into()));
        }
        if self.username.trim().is_empty() {
            return Err(Error::Validation("mikrotik username must not be empty".into()));
        }
        if self.port == 0 {
            return Err(Error::Validation("mikrotik port must be non-zero".into()));
        }
        if self.detection_time == 0 {
            return Err(Error::Validation(
                "detection_time must be at least one second".into(),
            ));
        }
        Ok(())
    }

    pub fn detection_interval(&self) -> Duration {
        Duration::from_secs(self.detection_time)
    }

    /// `host:port` for the API socket.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
