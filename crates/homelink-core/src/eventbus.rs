//! State bus carrying entity events to the host.
//!
//! Integrations publish `EntityEvent`s; the host (or a test) subscribes and
//! re-renders whatever changed. Delivery uses a broadcast channel, so every
//! subscriber sees events in publish order.

use tokio::sync::broadcast;

use crate::event::{EntityEvent, EventMetadata};

/// Default channel capacity for the state bus.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Broadcast bus for entity events.
#[derive(Clone)]
pub struct StateBus {
    tx: broadcast::Sender<(EntityEvent, EventMetadata)>,
    /// Name used as the default event source
    name: String,
}

impl StateBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus buffering up to `capacity` events for slow subscribers.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            name: "homelink".to_string(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            tx: broadcast::channel(DEFAULT_CHANNEL_CAPACITY).0,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Publish an event with the bus name as source.
    ///
    /// Returns `true` if there was at least one subscriber.
    pub fn publish(&self, event: EntityEvent) -> bool {
        let metadata = EventMetadata::new(self.name.clone());
        self.publish_with_metadata(event, metadata)
    }

    pub fn publish_with_metadata(&self, event: EntityEvent, metadata: EventMetadata) -> bool {
        self.tx.send((event, metadata)).is_ok()
    }

    pub fn subscribe(&self) -> StateBusReceiver {
        StateBusReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Subscribe to events for a single entity.
    pub fn subscribe_entity(
        &self,
        unique_id: impl Into<String>,
    ) -> FilteredReceiver<impl Fn(&EntityEvent) -> bool + Send + 'static> {
        let target = unique_id.into();
        FilteredReceiver::new(self.tx.subscribe(), move |event| {
            event.unique_id() == target
        })
    }

    /// Subscribe to state changes only.
    pub fn subscribe_state_changes(&self) -> FilteredReceiver<fn(&EntityEvent) -> bool> {
        FilteredReceiver::new(self.tx.subscribe(), EntityEvent::is_state_event)
    }
}

impl Default for StateBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver for all events from the state bus.
pub struct StateBusReceiver {
    rx: broadcast::Receiver<(EntityEvent, EventMetadata)>,
}

impl StateBusReceiver {
    /// Receive the next event.
    ///
    /// Returns `None` if the bus is closed.
    pub async fn recv(&mut self) -> Option<(EntityEvent, EventMetadata)> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!("State bus receiver lagged, skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<(EntityEvent, EventMetadata)> {
        self.rx.try_recv().ok()
    }
}

/// Receiver that only yields events accepted by a filter.
pub struct FilteredReceiver<F>
where
    F: Fn(&EntityEvent) -> bool + Send,
{
    rx: broadcast::Receiver<(EntityEvent, EventMetadata)>,
    filter: F,
}

impl<F> FilteredReceiver<F>
where
    F: Fn(&EntityEvent) -> bool + Send,
{
    fn new(rx: broadcast::Receiver<(EntityEvent, EventMetadata)>, filter: F) -> Self {
        Self { rx, filter }
    }

    pub async fn recv(&mut self) -> Option<(EntityEvent, EventMetadata)> {
        loop {
            match self.rx.recv().await {
                Ok((event, meta)) => {
                    if (self.filter)(&event) {
                        return Some((event, meta));
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    pub fn try_recv(&mut self) -> Option<(EntityEvent, EventMetadata)> {
        while let Ok((event, meta)) = self.rx.try_recv() {
            if (self.filter)(&event) {
                return Some((event, meta));
            }
        }
        None
    }
}
