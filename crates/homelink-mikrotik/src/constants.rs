//! Constants used by the Mikrotik integration.

pub const DOMAIN: &str = "mikrotik";
pub const DEFAULT_NAME: &str = "Mikrotik";
pub const DEFAULT_API_PORT: u16 = 8728;
/// Seconds a client may be unseen before it is considered away.
pub const DEFAULT_DETECTION_TIME: u64 = 300;

pub const ATTR_MANUFACTURER: &str = "Mikrotik";
pub const ATTR_SERIAL_NUMBER: &str = "serial-number";
pub const ATTR_FIRMWARE: &str = "current-firmware";
pub const ATTR_MODEL: &str = "model";

pub const CONF_ARP_PING: &str = "arp_ping";
pub const CONF_FORCE_DHCP: &str = "force_dhcp";
pub const CONF_DETECTION_TIME: &str = "detection_time";

pub const NAME: &str = "name";
pub const INFO: &str = "info";
pub const IDENTITY: &str = "identity";
pub const ARP: &str = "arp";

pub const CAPSMAN: &str = "capsman";
pub const DHCP: &str = "dhcp";
pub const WIRELESS: &str = "wireless";
pub const IS_WIRELESS: &str = "is_wireless";
pub const IS_CAPSMAN: &str = "is_capsman";

/// Host platforms the integration sets up.
pub const PLATFORMS: [&str; 1] = ["device_tracker"];

/// Registration-table fields copied onto device tracker entities.
pub const ATTR_DEVICE_TRACKER: [&str; 9] = [
    "comment",
    "mac-address",
    "ssid",
    "interface",
    "signal-strength",
    "signal-to-noise",
    "rx-rate",
    "tx-rate",
    "uptime",
];
