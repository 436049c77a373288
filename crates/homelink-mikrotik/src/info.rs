//! Router and client attributes extracted from API replies.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::{
    ATTR_DEVICE_TRACKER, ATTR_FIRMWARE, ATTR_MANUFACTURER, ATTR_MODEL, ATTR_SERIAL_NUMBER,
    DEFAULT_NAME, NAME,
};

/// Device registry information for a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterInfo {
    pub name: String,
    pub manufacturer: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub firmware: Option<String>,
}

impl RouterInfo {
    /// Build from the `/system/routerboard` reply and the identity name.
    pub fn from_attributes(routerboard: &HashMap<String, String>, identity: Option<&str>) -> Self {
        let get = |key: &str| routerboard.get(key).filter(|v| !v.is_empty()).cloned();
        Self {
            name: identity
                .filter(|n| !n.is_empty())
                .unwrap_or(DEFAULT_NAME)
                .to_string(),
            manufacturer: ATTR_MANUFACTURER.to_string(),
            model: get(ATTR_MODEL),
            serial_number: get(ATTR_SERIAL_NUMBER),
            firmware: get(ATTR_FIRMWARE),
        }
    }

    /// Reads the router name from an `/system/identity` reply.
    pub fn identity_name(identity: &HashMap<String, String>) -> Option<&str> {
        identity.get(NAME).map(String::as_str)
    }
}

/// Copy the tracked registration-table fields of a client.
pub fn device_tracker_attributes(client: &HashMap<String, String>) -> BTreeMap<String, String> {
    ATTR_DEVICE_TRACKER
        .iter()
        .filter_map(|key| client.get(*key).map(|v| (key.to_string(), v.clone())))
        .collect()
}
