//! Entity lifecycle and state events.

use serde::{Deserialize, Serialize};

/// Events published by integrations towards the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EntityEvent {
    /// An entity was registered with the host.
    Added {
        unique_id: String,
        platform: String,
    },
    /// An entity's state should be re-rendered by the host.
    StateChanged {
        unique_id: String,
        state: serde_json::Value,
    },
    /// An entity was torn down.
    Removed { unique_id: String },
}

impl EntityEvent {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Added { .. } => "Added",
            Self::StateChanged { .. } => "StateChanged",
            Self::Removed { .. } => "Removed",
        }
    }

    /// Unique id of the entity the event concerns.
    pub fn unique_id(&self) -> &str {
        match self {
            Self::Added { unique_id, .. }
            | Self::StateChanged { unique_id, .. }
            | Self::Removed { unique_id } => unique_id,
        }
    }

    pub fn is_state_event(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }
}

/// Event metadata.
///
/// Attached to each event for tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event ID
    pub event_id: String,
    /// Event source (component that published)
    pub source: String,
    /// Event timestamp
    pub timestamp: i64,
}

impl EventMetadata {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            source: source.into(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = EntityEvent::StateChanged {
            unique_id: "00:11-1-on_level".to_string(),
            state: serde_json::json!({ "value": 10 }),
        };
        assert_eq!(event.type_name(), "StateChanged");
        assert_eq!(event.unique_id(), "00:11-1-on_level");
        assert!(event.is_state_event());

        let removed = EntityEvent::Removed {
            unique_id: "x".to_string(),
        };
        assert!(!removed.is_state_event());
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = EntityEvent::Removed {
            unique_id: "x".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Removed");
    }

    #[test]
    fn test_metadata_ids_are_unique() {
        let a = EventMetadata::new("zha");
        let b = EventMetadata::new("zha");
        assert_ne!(a.event_id, b.event_id);
        assert_eq!(b.source, "zha");
    }
}
