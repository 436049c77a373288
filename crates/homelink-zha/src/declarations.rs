//! Number declarations and the registry that maps devices to them.
//!
//! Each configuration attribute is described by a `ConfigDeclaration`
//! record. The `DeclarationRegistry` pairs declarations with a `MatchRule`
//! so a discovery component can ask which numbers a device channel exposes.

use crate::bounds::{AttributeBounds, BoundsError};
use crate::channel::NativeType;
use crate::{icons, units};

/// Level control channel name.
pub const CHANNEL_LEVEL: &str = "level";
/// Analog output channel name.
pub const CHANNEL_ANALOG_OUTPUT: &str = "analog_output";
pub const CHANNEL_OPPLE: &str = "opple_cluster";
pub const CHANNEL_TUYA_MANUFACTURER: &str = "tuya_manufacturer";
pub const CHANNEL_IKEA_AIRPURIFIER: &str = "ikea_airpurifier";

/// Analog output cluster attribute names.
pub mod analog_attrs {
    pub const PRESENT_VALUE: &str = "present_value";
    pub const MIN_PRESENT_VALUE: &str = "min_present_value";
    pub const MAX_PRESENT_VALUE: &str = "max_present_value";
    pub const RESOLUTION: &str = "resolution";
    pub const DESCRIPTION: &str = "description";
    pub const APPLICATION_TYPE: &str = "application_type";
    pub const ENGINEERING_UNITS: &str = "engineering_units";

    /// Attributes that change how the entity is presented.
    pub const PRESENTATION: [&str; 6] = [
        MIN_PRESENT_VALUE,
        MAX_PRESENT_VALUE,
        RESOLUTION,
        DESCRIPTION,
        APPLICATION_TYPE,
        ENGINEERING_UNITS,
    ];
}

/// A fixed-bound configuration attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigDeclaration {
    /// Appended to the channel id to build the entity unique id.
    pub id_suffix: &'static str,
    /// Appended to the device name to build the entity name.
    pub display_name: &'static str,
    pub bounds: AttributeBounds,
    pub native_type: NativeType,
    /// Engineering unit code, resolved through [`units::unit_label`].
    pub unit: Option<u16>,
    /// Application type code, resolved through [`icons::icon`].
    pub icon: Option<u16>,
}

impl ConfigDeclaration {
    pub const fn new(
        id_suffix: &'static str,
        display_name: &'static str,
        bounds: AttributeBounds,
    ) -> Self {
        Self {
            id_suffix,
            display_name,
            bounds,
            native_type: NativeType::Integer,
            unit: None,
            icon: None,
        }
    }

    pub const fn with_unit(mut self, unit: u16) -> Self {
        self.unit = Some(unit);
        self
    }

    pub const fn with_icon(mut self, icon: u16) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn attribute(&self) -> &'static str {
        self.bounds.attribute
    }

    pub fn unit_label(&self) -> Option<&'static str> {
        self.unit.and_then(units::unit_label)
    }

    pub fn icon_id(&self) -> Option<&'static str> {
        self.icon.and_then(icons::icon)
    }
}

/// What kind of number entity a registry entry produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberDeclaration {
    /// Analog output `present_value`, with bounds reported by the device.
    AnalogOutput,
    /// Fixed-bound configuration attribute.
    Configuration(ConfigDeclaration),
}

impl NumberDeclaration {
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::AnalogOutput => analog_attrs::PRESENT_VALUE,
            Self::Configuration(decl) => decl.attribute(),
        }
    }
}

/// Identity of the device a channel belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceSignature {
    pub manufacturer: String,
    pub model: String,
}

impl DeviceSignature {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }

    /// Name prefix for entities of this device.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

/// Which channels and devices a declaration applies to.
///
/// Empty `models`/`manufacturers` lists match any device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRule {
    pub channel: &'static str,
    pub models: &'static [&'static str],
    pub manufacturers: &'static [&'static str],
}

impl MatchRule {
    pub const fn channel(channel: &'static str) -> Self {
        Self {
            channel,
            models: &[],
            manufacturers: &[],
        }
    }

    pub const fn with_models(mut self, models: &'static [&'static str]) -> Self {
        self.models = models;
        self
    }

    pub const fn with_manufacturers(mut self, manufacturers: &'static [&'static str]) -> Self {
        self.manufacturers = manufacturers;
        self
    }

    pub fn matches(&self, channel: &str, device: &DeviceSignature) -> bool {
        self.channel == channel
            && (self.models.is_empty() || self.models.iter().any(|m| *m == device.model))
            && (self.manufacturers.is_empty()
                || self.manufacturers.iter().any(|m| *m == device.manufacturer))
    }
}

/// A declaration together with the rule that selects it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistryEntry {
    pub rule: MatchRule,
    pub declaration: NumberDeclaration,
}

pub const DETECTION_INTERVAL: ConfigDeclaration = ConfigDeclaration::new(
    "detection_interval",
    "Detection interval",
    AttributeBounds::config("detection_interval", 2.0, 65535.0),
);

pub const ON_OFF_TRANSITION_TIME: ConfigDeclaration = ConfigDeclaration::new(
    "on_off_transition_time",
    "On/Off transition time",
    AttributeBounds::config("on_off_transition_time", 0x0000 as f64, 0xFFFF as f64),
);

pub const ON_LEVEL: ConfigDeclaration = ConfigDeclaration::new(
    "on_level",
    "On level",
    AttributeBounds::config("on_level", 0x00 as f64, 0xFF as f64),
);

pub const ON_TRANSITION_TIME: ConfigDeclaration = ConfigDeclaration::new(
    "on_transition_time",
    "On transition time",
    AttributeBounds::config("on_transition_time", 0x0000 as f64, 0xFFFE as f64),
);

pub const OFF_TRANSITION_TIME: ConfigDeclaration = ConfigDeclaration::new(
    "off_transition_time",
    "Off transition time",
    AttributeBounds::config("off_transition_time", 0x0000 as f64, 0xFFFE as f64),
);

pub const DEFAULT_MOVE_RATE: ConfigDeclaration = ConfigDeclaration::new(
    "default_move_rate",
    "Default move rate",
    AttributeBounds::config("default_move_rate", 0x00 as f64, 0xFE as f64),
);

pub const START_UP_CURRENT_LEVEL: ConfigDeclaration = ConfigDeclaration::new(
    "start_up_current_level",
    "Start-up current level",
    AttributeBounds::config("start_up_current_level", 0x00 as f64, 0xFF as f64),
);

pub const TIMER_DURATION: ConfigDeclaration = ConfigDeclaration::new(
    "timer_duration",
    "Timer duration",
    AttributeBounds::config("timer_duration", 0x00 as f64, 0x257 as f64),
)
.with_unit(units::MINUTES)
.with_icon(icons::TIMER);

pub const FILTER_LIFE_TIME: ConfigDeclaration = ConfigDeclaration::new(
    "filter_life_time",
    "Filter life time",
    AttributeBounds::config("filter_life_time", 0x00 as f64, 0xFFFF_FFFF_u32 as f64),
)
.with_unit(units::MINUTES)
.with_icon(icons::TIMER);

const BUILTIN: &[RegistryEntry] = &[
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_ANALOG_OUTPUT),
        declaration: NumberDeclaration::AnalogOutput,
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_OPPLE).with_models(&["lumi.motion.ac02"]),
        declaration: NumberDeclaration::Configuration(DETECTION_INTERVAL),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(ON_OFF_TRANSITION_TIME),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(ON_LEVEL),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(ON_TRANSITION_TIME),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(OFF_TRANSITION_TIME),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(DEFAULT_MOVE_RATE),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_LEVEL),
        declaration: NumberDeclaration::Configuration(START_UP_CURRENT_LEVEL),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_TUYA_MANUFACTURER)
            .with_manufacturers(&["_TZE200_htnnfasr"]),
        declaration: NumberDeclaration::Configuration(TIMER_DURATION),
    },
    RegistryEntry {
        rule: MatchRule::channel(CHANNEL_IKEA_AIRPURIFIER)
            .with_models(&["STARKVIND Air purifier"]),
        declaration: NumberDeclaration::Configuration(FILTER_LIFE_TIME),
    },
];

/// Registry of number declarations.
#[derive(Debug, Clone, Default)]
pub struct DeclarationRegistry {
    entries: Vec<RegistryEntry>,
}

impl DeclarationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in declaration.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.to_vec(),
        }
    }

    /// Add a declaration, rejecting invalid bounds.
    pub fn register(
        &mut self,
        rule: MatchRule,
        declaration: NumberDeclaration,
    ) -> Result<(), BoundsError> {
        if let NumberDeclaration::Configuration(decl) = &declaration {
            decl.bounds.validate()?;
        }
        self.entries.push(RegistryEntry { rule, declaration });
        Ok(())
    }

    /// Declarations that apply to `channel` on `device`, in registration order.
    pub fn matching<'a>(
        &'a self,
        channel: &'a str,
        device: &'a DeviceSignature,
    ) -> impl Iterator<Item = &'a NumberDeclaration> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.rule.matches(channel, device))
            .map(|entry| &entry.declaration)
    }

    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
