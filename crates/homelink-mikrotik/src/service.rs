//! RouterOS API endpoints polled by the integration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// A RouterOS query the polling client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MikrotikService {
    Arp,
    Capsman,
    Dhcp,
    Identity,
    Info,
    Wireless,
    IsWireless,
    IsCapsman,
}

impl MikrotikService {
    pub const ALL: [MikrotikService; 8] = [
        Self::Arp,
        Self::Capsman,
        Self::Dhcp,
        Self::Identity,
        Self::Info,
        Self::Wireless,
        Self::IsWireless,
        Self::IsCapsman,
    ];

    /// Key naming the service in configuration and data maps.
    pub fn key(self) -> &'static str {
        match self {
            Self::Arp => constants::ARP,
            Self::Capsman => constants::CAPSMAN,
            Self::Dhcp => constants::DHCP,
            Self::Identity => constants::IDENTITY,
            Self::Info => constants::INFO,
            Self::Wireless => constants::WIRELESS,
            Self::IsWireless => constants::IS_WIRELESS,
            Self::IsCapsman => constants::IS_CAPSMAN,
        }
    }

    /// RouterOS API command path.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Arp => "/ip/arp/getall",
            Self::Capsman => "/caps-man/registration-table/getall",
            Self::Dhcp => "/ip/dhcp-server/lease/getall",
            Self::Identity => "/system/identity/getall",
            Self::Info => "/system/routerboard/getall",
            Self::Wireless => "/interface/wireless/registration-table/getall",
            Self::IsWireless => "/interface/wireless/print",
            Self::IsCapsman => "/caps-man/interface/print",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Whether the service lists connected clients.
    pub fn lists_clients(self) -> bool {
        matches!(self, Self::Arp | Self::Capsman | Self::Dhcp | Self::Wireless)
    }
}

impl std::fmt::Display for MikrotikService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
