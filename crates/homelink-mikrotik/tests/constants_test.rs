//! Mikrotik constant and endpoint map tests

use homelink_mikrotik::constants::{self, ATTR_DEVICE_TRACKER, PLATFORMS};
use homelink_mikrotik::MikrotikService;

#[test]
fn test_defaults() {
    assert_eq!(constants::DOMAIN, "mikrotik");
    assert_eq!(constants::DEFAULT_NAME, "Mikrotik");
    assert_eq!(constants::DEFAULT_API_PORT, 8728);
    assert_eq!(constants::DEFAULT_DETECTION_TIME, 300);
    assert_eq!(PLATFORMS, ["device_tracker"]);
}

#[test]
fn test_config_keys() {
    assert_eq!(constants::CONF_ARP_PING, "arp_ping");
    assert_eq!(constants::CONF_FORCE_DHCP, "force_dhcp");
    assert_eq!(constants::CONF_DETECTION_TIME, "detection_time");
}

#[test]
fn test_service_map() {
    let map: Vec<(&str, &str)> = MikrotikService::ALL
        .into_iter()
        .map(|s| (s.key(), s.endpoint()))
        .collect();
    assert_eq!(
        map,
        vec![
            ("arp", "/ip/arp/getall"),
            ("capsman", "/caps-man/registration-table/getall"),
            ("dhcp", "/ip/dhcp-server/lease/getall"),
            ("identity", "/system/identity/getall"),
            ("info", "/system/routerboard/getall"),
            ("wireless", "/interface/wireless/registration-table/getall"),
            ("is_wireless", "/interface/wireless/print"),
            ("is_capsman", "/caps-man/interface/print"),
        ]
    );
}

#[test]
fn test_device_tracker_attributes() {
    assert_eq!(ATTR_DEVICE_TRACKER.len(), 9);
    assert_eq!(ATTR_DEVICE_TRACKER[0], "comment");
    assert!(ATTR_DEVICE_TRACKER.contains(&"signal-to-noise"));
}
