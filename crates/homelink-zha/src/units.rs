//! BACnet engineering units reported by the analog output cluster.
//!
//! The table is sorted by code. Code 95 is "no units" and has no label;
//! code 184 is not assigned.

/// Engineering unit code for minutes.
pub const MINUTES: u16 = 72;

/// Engineering unit code meaning "no units".
pub const NO_UNITS: u16 = 95;

/// Every assigned engineering unit code and its display label.
pub static UNITS: &[(u16, Option<&str>)] = &[
    (0, Some("Square-meters")),
    (1, Some("Square-feet")),
    (2, Some("Milliamperes")),
    (3, Some("Amperes")),
    (4, Some("Ohms")),
    (5, Some("Volts")),
    (6, Some("Kilo-volts")),
    (7, Some("Mega-volts")),
    (8, Some("Volt-amperes")),
    (9, Some("Kilo-volt-amperes")),
    (10, Some("Mega-volt-amperes")),
    (11, Some("Volt-amperes-reactive")),
    (12, Some("Kilo-volt-amperes-reactive")),
    (13, Some("Mega-volt-amperes-reactive")),
    (14, Some("Degrees-phase")),
    (15, Some("Power-factor")),
    (16, Some("Joules")),
    (17, Some("Kilojoules")),
    (18, Some("Watt-hours")),
    (19, Some("Kilowatt-hours")),
    (20, Some("BTUs")),
    (21, Some("Therms")),
    (22, Some("Ton-hours")),
    (23, Some("Joules-per-kilogram-dry-air")),
    (24, Some("BTUs-per-pound-dry-air")),
    (25, Some("Cycles-per-hour")),
    (26, Some("Cycles-per-minute")),
    (27, Some("Hertz")),
    (28, Some("Grams-of-water-per-kilogram-dry-air")),
    (29, Some("Percent-relative-humidity")),
    (30, Some("Millimeters")),
    (31, Some("Meters")),
    (32, Some("Inches")),
    (33, Some("Feet")),
    (34, Some("Watts-per-square-foot")),
    (35, Some("Watts-per-square-meter")),
    (36, Some("Lumens")),
    (37, Some("Luxes")),
    (38, Some("Foot-candles")),
    (39, Some("Kilograms")),
    (40, Some("Pounds-mass")),
    (41, Some("Tons")),
    (42, Some("Kilograms-per-second")),
    (43, Some("Kilograms-per-minute")),
    (44, Some("Kilograms-per-hour")),
    (45, Some("Pounds-mass-per-minute")),
    (46, Some("Pounds-mass-per-hour")),
    (47, Some("Watts")),
    (48, Some("Kilowatts")),
    (49, Some("Megawatts")),
    (50, Some("BTUs-per-hour")),
    (51, Some("Horsepower")),
    (52, Some("Tons-refrigeration")),
    (53, Some("Pascals")),
    (54, Some("Kilopascals")),
    (55, Some("Bars")),
    (56, Some("Pounds-force-per-square-inch")),
    (57, Some("Centimeters-of-water")),
    (58, Some("Inches-of-water")),
    (59, Some("Millimeters-of-mercury")),
    (60, Some("Centimeters-of-mercury")),
    (61, Some("Inches-of-mercury")),
    (62, Some("°C")),
    (63, Some("°K")),
    (64, Some("°F")),
    (65, Some("Degree-days-Celsius")),
    (66, Some("Degree-days-Fahrenheit")),
    (67, Some("Years")),
    (68, Some("Months")),
    (69, Some("Weeks")),
    (70, Some("Days")),
    (71, Some("Hours")),
    (72, Some("Minutes")),
    (73, Some("Seconds")),
    (74, Some("Meters-per-second")),
    (75, Some("Kilometers-per-hour")),
    (76, Some("Feet-per-second")),
    (77, Some("Feet-per-minute")),
    (78, Some("Miles-per-hour")),
    (79, Some("Cubic-feet")),
    (80, Some("Cubic-meters")),
    (81, Some("Imperial-gallons")),
    (82, Some("Liters")),
    (83, Some("Us-gallons")),
    (84, Some("Cubic-feet-per-minute")),
    (85, Some("Cubic-meters-per-second")),
    (86, Some("Imperial-gallons-per-minute")),
    (87, Some("Liters-per-second")),
    (88, Some("Liters-per-minute")),
    (89, Some("Us-gallons-per-minute")),
    (90, Some("Degrees-angular")),
    (91, Some("Degrees-Celsius-per-hour")),
    (92, Some("Degrees-Celsius-per-minute")),
    (93, Some("Degrees-Fahrenheit-per-hour")),
    (94, Some("Degrees-Fahrenheit-per-minute")),
    (95, None),
    (96, Some("Parts-per-million")),
    (97, Some("Parts-per-billion")),
    (98, Some("%")),
    (99, Some("Percent-per-second")),
    (100, Some("Per-minute")),
    (101, Some("Per-second")),
    (102, Some("Psi-per-Degree-Fahrenheit")),
    (103, Some("Radians")),
    (104, Some("Revolutions-per-minute")),
    (105, Some("Currency1")),
    (106, Some("Currency2")),
    (107, Some("Currency3")),
    (108, Some("Currency4")),
    (109, Some("Currency5")),
    (110, Some("Currency6")),
    (111, Some("Currency7")),
    (112, Some("Currency8")),
    (113, Some("Currency9")),
    (114, Some("Currency10")),
    (115, Some("Square-inches")),
    (116, Some("Square-centimeters")),
    (117, Some("BTUs-per-pound")),
    (118, Some("Centimeters")),
    (119, Some("Pounds-mass-per-second")),
    (120, Some("Delta-Degrees-Fahrenheit")),
    (121, Some("Delta-Degrees-Kelvin")),
    (122, Some("Kilohms")),
    (123, Some("Megohms")),
    (124, Some("Millivolts")),
    (125, Some("Kilojoules-per-kilogram")),
    (126, Some("Megajoules")),
    (127, Some("Joules-per-degree-Kelvin")),
    (128, Some("Joules-per-kilogram-degree-Kelvin")),
    (129, Some("Kilohertz")),
    (130, Some("Megahertz")),
    (131, Some("Per-hour")),
    (132, Some("Milliwatts")),
    (133, Some("Hectopascals")),
    (134, Some("Millibars")),
    (135, Some("Cubic-meters-per-hour")),
    (136, Some("Liters-per-hour")),
    (137, Some("Kilowatt-hours-per-square-meter")),
    (138, Some("Kilowatt-hours-per-square-foot")),
    (139, Some("Megajoules-per-square-meter")),
    (140, Some("Megajoules-per-square-foot")),
    (141, Some("Watts-per-square-meter-Degree-Kelvin")),
    (142, Some("Cubic-feet-per-second")),
    (143, Some("Percent-obscuration-per-foot")),
    (144, Some("Percent-obscuration-per-meter")),
    (145, Some("Milliohms")),
    (146, Some("Megawatt-hours")),
    (147, Some("Kilo-BTUs")),
    (148, Some("Mega-BTUs")),
    (149, Some("Kilojoules-per-kilogram-dry-air")),
    (150, Some("Megajoules-per-kilogram-dry-air")),
    (151, Some("Kilojoules-per-degree-Kelvin")),
    (152, Some("Megajoules-per-degree-Kelvin")),
    (153, Some("Newton")),
    (154, Some("Grams-per-second")),
    (155, Some("Grams-per-minute")),
    (156, Some("Tons-per-hour")),
    (157, Some("Kilo-BTUs-per-hour")),
    (158, Some("Hundredths-seconds")),
    (159, Some("Milliseconds")),
    (160, Some("Newton-meters")),
    (161, Some("Millimeters-per-second")),
    (162, Some("Millimeters-per-minute")),
    (163, Some("Meters-per-minute")),
    (164, Some("Meters-per-hour")),
    (165, Some("Cubic-meters-per-minute")),
    (166, Some("Meters-per-second-per-second")),
    (167, Some("Amperes-per-meter")),
    (168, Some("Amperes-per-square-meter")),
    (169, Some("Ampere-square-meters")),
    (170, Some("Farads")),
    (171, Some("Henrys")),
    (172, Some("Ohm-meters")),
    (173, Some("Siemens")),
    (174, Some("Siemens-per-meter")),
    (175, Some("Teslas")),
    (176, Some("Volts-per-degree-Kelvin")),
    (177, Some("Volts-per-meter")),
    (178, Some("Webers")),
    (179, Some("Candelas")),
    (180, Some("Candelas-per-square-meter")),
    (181, Some("Kelvins-per-hour")),
    (182, Some("Kelvins-per-minute")),
    (183, Some("Joule-seconds")),
    (185, Some("Square-meters-per-Newton")),
    (186, Some("Kilogram-per-cubic-meter")),
    (187, Some("Newton-seconds")),
    (188, Some("Newtons-per-meter")),
    (189, Some("Watts-per-meter-per-degree-Kelvin")),
];

fn lookup(code: u16) -> Option<&'static Option<&'static str>> {
    UNITS
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| &UNITS[idx].1)
}

/// Display label for an engineering unit code.
///
/// Unknown codes and the "no units" code both yield `None`.
pub fn unit_label(code: u16) -> Option<&'static str> {
    lookup(code).copied().flatten()
}

/// Whether `code` is an assigned engineering unit, including "no units".
pub fn is_assigned(code: u16) -> bool {
    lookup(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        assert!(UNITS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(unit_label(0), Some("Square-meters"));
        assert_eq!(unit_label(62), Some("°C"));
        assert_eq!(unit_label(MINUTES), Some("Minutes"));
        assert_eq!(unit_label(98), Some("%"));
        assert_eq!(unit_label(189), Some("Watts-per-meter-per-degree-Kelvin"));
    }

    #[test]
    fn test_no_units_code() {
        assert!(is_assigned(NO_UNITS));
        assert_eq!(unit_label(NO_UNITS), None);
    }

    #[test]
    fn test_unassigned_codes() {
        assert!(!is_assigned(184));
        assert_eq!(unit_label(184), None);
        assert_eq!(unit_label(190), None);
        assert_eq!(unit_label(u16::MAX), None);
    }
}
