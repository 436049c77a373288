//! Icons selected by the analog output application type.
//!
//! The application type attribute is 32 bits wide; its high 16 bits
//! (group and type) index this table.

/// Icon for timer-like settings.
pub const TIMER: u16 = 14;

/// Icon per application type code, indexed by code.
pub static ICONS: [&str; 15] = [
    "mdi:temperature-celsius",
    "mdi:water-percent",
    "mdi:gauge",
    "mdi:speedometer",
    "mdi:percent",
    "mdi:air-filter",
    "mdi:fan",
    "mdi:flash",
    "mdi:current-ac",
    "mdi:flash",
    "mdi:flash",
    "mdi:flash",
    "mdi:counter",
    "mdi:thermometer-lines",
    "mdi:timer",
];

pub fn icon(code: u16) -> Option<&'static str> {
    ICONS.get(usize::from(code)).copied()
}

/// Icon for `code`, or `default` when the code is not in the table.
pub fn icon_for(code: u16, default: &str) -> &str {
    icon(code).unwrap_or(default)
}

/// Icon for a raw 32-bit application type value.
pub fn application_type_icon(application_type: i64) -> Option<&'static str> {
    u16::try_from(application_type >> 16).ok().and_then(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_resolves() {
        for code in 0..=14u16 {
            assert!(icon(code).is_some(), "code {} has no icon", code);
        }
    }

    #[test]
    fn test_unknown_code_uses_default() {
        assert_eq!(icon_for(15, "mdi:numeric"), "mdi:numeric");
        assert_eq!(icon_for(u16::MAX, "mdi:numeric"), "mdi:numeric");
    }

    #[test]
    fn test_application_type_high_bits() {
        // group 0x00, type 0x0E, index 0x0001
        assert_eq!(application_type_icon(0x000E_0001), Some("mdi:timer"));
        assert_eq!(application_type_icon(0x0001_FFFF), Some("mdi:water-percent"));
        assert_eq!(application_type_icon(0x0100_0000), None);
        assert_eq!(application_type_icon(-1), None);
    }
}
