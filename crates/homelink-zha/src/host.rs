//! Host-facing view of number entities.

use homelink_core::{EntityEvent, StateBus};
use serde::{Deserialize, Serialize};

use crate::bounds::EntityCategory;

/// Platform name used in lifecycle events.
pub const PLATFORM: &str = "number";

/// Everything the host renders for one number entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberSnapshot {
    pub unique_id: String,
    pub name: String,
    pub value: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<EntityCategory>,
    pub read_only: bool,
}

/// Sink for entity state, implemented by the host.
pub trait StatePublisher: Send + Sync {
    /// Called after every confirmed change and every delivered update.
    fn publish_state(&self, snapshot: &NumberSnapshot);

    fn entity_added(&self, _unique_id: &str) {}

    fn entity_removed(&self, _unique_id: &str) {}
}

impl StatePublisher for StateBus {
    fn publish_state(&self, snapshot: &NumberSnapshot) {
        let state = match serde_json::to_value(snapshot) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to serialize state of {}: {}", snapshot.unique_id, e);
                return;
            }
        };
        self.publish(EntityEvent::StateChanged {
            unique_id: snapshot.unique_id.clone(),
            state,
        });
    }

    fn entity_added(&self, unique_id: &str) {
        self.publish(EntityEvent::Added {
            unique_id: unique_id.to_string(),
            platform: PLATFORM.to_string(),
        });
    }

    fn entity_removed(&self, unique_id: &str) {
        self.publish(EntityEvent::Removed {
            unique_id: unique_id.to_string(),
        });
    }
}
