//! In-memory attribute channel for tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use homelink_zha::{AttributeChannel, AttributeUpdate, AttributeValue, ChannelError, WriteOutcome};
use parking_lot::Mutex;
use tokio::sync::{broadcast, Notify};

pub struct MockChannel {
    name: String,
    unique_id: String,
    cache: Mutex<HashMap<String, AttributeValue>>,
    unsupported: Mutex<HashSet<String>>,
    reads: Mutex<VecDeque<Result<Option<AttributeValue>, ChannelError>>>,
    write_results: Mutex<VecDeque<Result<WriteOutcome, ChannelError>>>,
    writes: Mutex<Vec<(String, AttributeValue)>>,
    gate: Mutex<Option<Arc<Notify>>>,
    pub write_started: Arc<Notify>,
    tx: broadcast::Sender<AttributeUpdate>,
}

impl MockChannel {
    pub fn new(name: &str, unique_id: &str) -> Self {
        Self {
            name: name.to_string(),
            unique_id: unique_id.to_string(),
            cache: Mutex::new(HashMap::new()),
            unsupported: Mutex::new(HashSet::new()),
            reads: Mutex::new(VecDeque::new()),
            write_results: Mutex::new(VecDeque::new()),
            writes: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            write_started: Arc::new(Notify::new()),
            tx: broadcast::channel(16).0,
        }
    }

    pub fn with_value(self, attribute: &str, value: impl Into<AttributeValue>) -> Self {
        self.cache.lock().insert(attribute.to_string(), value.into());
        self
    }

    pub fn with_unsupported(self, attribute: &str) -> Self {
        self.unsupported.lock().insert(attribute.to_string());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn queue_write(&self, result: Result<WriteOutcome, ChannelError>) {
        self.write_results.lock().push_back(result);
    }

    pub fn queue_read(&self, result: Result<Option<AttributeValue>, ChannelError>) {
        self.reads.lock().push_back(result);
    }

    /// Hold every following write until the returned handle is notified.
    pub fn hold_writes(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(Arc::clone(&gate));
        gate
    }

    pub fn writes(&self) -> Vec<(String, AttributeValue)> {
        self.writes.lock().clone()
    }

    /// Update the cache, then publish the report.
    pub fn report(&self, attribute_id: u16, attribute: &str, value: impl Into<AttributeValue>) {
        let value = value.into();
        self.cache.lock().insert(attribute.to_string(), value.clone());
        let _ = self.tx.send(AttributeUpdate {
            attribute_id,
            attribute: attribute.to_string(),
            value,
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait]
impl AttributeChannel for MockChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn unique_id(&self) -> &str {
        &self.unique_id
    }

    fn is_attribute_unsupported(&self, attribute: &str) -> bool {
        self.unsupported.lock().contains(attribute)
    }

    fn cached_value(&self, attribute: &str) -> Option<AttributeValue> {
        self.cache.lock().get(attribute).cloned()
    }

    async fn read_attribute(&self, attribute: &str) -> Result<Option<AttributeValue>, ChannelError> {
        let queued = self.reads.lock().pop_front();
        match queued {
            Some(Ok(Some(value))) => {
                self.cache.lock().insert(attribute.to_string(), value.clone());
                Ok(Some(value))
            }
            Some(other) => other,
            None => Ok(self.cached_value(attribute)),
        }
    }

    async fn write_attribute(
        &self,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<WriteOutcome, ChannelError> {
        self.writes.lock().push((attribute.to_string(), value));
        self.write_started.notify_one();

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.write_results
            .lock()
            .pop_front()
            .unwrap_or(Ok(WriteOutcome::Success))
    }

    fn subscribe(&self) -> broadcast::Receiver<AttributeUpdate> {
        self.tx.subscribe()
    }
}
