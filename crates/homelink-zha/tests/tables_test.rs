//! Metadata table tests

use homelink_zha::icons::{self, ICONS};
use homelink_zha::units::{self, UNITS};
use homelink_zha::{icon_for, unit_label};

#[test]
fn test_every_assigned_unit_round_trips() {
    for (code, label) in UNITS {
        assert_eq!(unit_label(*code), *label, "code {}", code);
        assert!(units::is_assigned(*code));
    }
    // 0..=189 without 184
    assert_eq!(UNITS.len(), 189);
}

#[test]
fn test_unit_labels_across_the_table() {
    let expected: &[(u16, &str)] = &[
        (0, "Square-meters"),
        (10, "Mega-volt-amperes"),
        (20, "BTUs"),
        (30, "Millimeters"),
        (40, "Pounds-mass"),
        (50, "BTUs-per-hour"),
        (60, "Centimeters-of-mercury"),
        (70, "Days"),
        (72, "Minutes"),
        (80, "Cubic-meters"),
        (90, "Degrees-angular"),
        (100, "Per-minute"),
        (110, "Currency6"),
        (120, "Delta-Degrees-Fahrenheit"),
        (130, "Megahertz"),
        (140, "Megajoules-per-square-foot"),
        (150, "Megajoules-per-kilogram-dry-air"),
        (160, "Newton-meters"),
        (170, "Farads"),
        (180, "Candelas-per-square-meter"),
        (183, "Joule-seconds"),
        (185, "Square-meters-per-Newton"),
        (189, "Watts-per-meter-per-degree-Kelvin"),
    ];
    for (code, label) in expected {
        assert_eq!(unit_label(*code), Some(*label), "code {}", code);
    }
    assert_eq!(unit_label(units::MINUTES), Some("Minutes"));
    assert_eq!(unit_label(units::NO_UNITS), None);
}

#[test]
fn test_only_no_units_code_lacks_a_label() {
    let unlabelled: Vec<u16> = UNITS
        .iter()
        .filter(|(_, label)| label.is_none())
        .map(|(code, _)| *code)
        .collect();
    assert_eq!(unlabelled, vec![95]);
}

#[test]
fn test_temperature_units() {
    assert_eq!(unit_label(62), Some("°C"));
    assert_eq!(unit_label(63), Some("°K"));
    assert_eq!(unit_label(64), Some("°F"));
}

#[test]
fn test_undefined_unit_codes() {
    assert_eq!(unit_label(184), None);
    for code in 190..=300 {
        assert_eq!(unit_label(code), None);
    }
}

#[test]
fn test_every_icon_round_trips() {
    for (code, expected) in ICONS.iter().enumerate() {
        let code = code as u16;
        assert_eq!(icon_for(code, "mdi:default"), *expected);
    }
    assert_eq!(icon_for(icons::TIMER, "mdi:default"), "mdi:timer");
}

#[test]
fn test_undefined_icon_codes_fall_back() {
    for code in 15..=64 {
        assert_eq!(icon_for(code, "mdi:numeric"), "mdi:numeric");
    }
}
