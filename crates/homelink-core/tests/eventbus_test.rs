//! State bus integration tests

use std::sync::Arc;

use homelink_core::{EntityEvent, EventMetadata, StateBus};
use serde_json::json;

fn state(unique_id: &str, value: f64) -> EntityEvent {
    EntityEvent::StateChanged {
        unique_id: unique_id.to_string(),
        state: json!({ "value": value }),
    }
}

#[tokio::test]
async fn test_multiple_subscribers_receive_same_event() {
    let bus = StateBus::new();
    let mut first = bus.subscribe();
    let mut second = bus.subscribe();
    assert_eq!(bus.subscriber_count(), 2);

    assert!(bus.publish(state("ab-1-8-on_level", 128.0)));

    let (a, _) = first.recv().await.unwrap();
    let (b, _) = second.recv().await.unwrap();
    assert_eq!(a, b);
    assert_eq!(a.unique_id(), "ab-1-8-on_level");
}

#[tokio::test]
async fn test_publish_without_subscribers() {
    let bus = StateBus::new();
    assert!(!bus.publish(state("x", 1.0)));
}

#[tokio::test]
async fn test_entity_filter_skips_other_entities() {
    let bus = StateBus::new();
    let mut rx = bus.subscribe_entity("wanted");

    bus.publish(state("other", 1.0));
    bus.publish(EntityEvent::Removed {
        unique_id: "wanted".to_string(),
    });

    let (event, _) = rx.recv().await.unwrap();
    assert_eq!(event.type_name(), "Removed");
    assert!(rx.try_recv().is_none());
}

#[tokio::test]
async fn test_state_change_filter() {
    let bus = StateBus::new();
    let mut rx = bus.subscribe_state_changes();

    bus.publish(EntityEvent::Added {
        unique_id: "a".to_string(),
        platform: "number".to_string(),
    });
    bus.publish(state("a", 3.0));

    let (event, _) = rx.recv().await.unwrap();
    assert!(event.is_state_event());
}

#[tokio::test]
async fn test_metadata_is_preserved() {
    let bus = StateBus::with_name("zha");
    let mut rx = bus.subscribe();

    bus.publish_with_metadata(
        state("a", 1.0),
        EventMetadata::new("entity"),
    );
    bus.publish(state("a", 2.0));

    let (_, meta) = rx.recv().await.unwrap();
    assert_eq!(meta.source, "entity");

    let (_, meta) = rx.recv().await.unwrap();
    assert_eq!(meta.source, "zha");
}

#[tokio::test]
async fn test_concurrent_publishers() {
    let bus = Arc::new(StateBus::with_capacity(64));
    let mut rx = bus.subscribe();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bus = bus.clone();
            tokio::spawn(async move {
                bus.publish(state(&format!("entity-{}", i), i as f64));
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let mut seen = Vec::new();
    while let Some((event, _)) = rx.try_recv() {
        seen.push(event.unique_id().to_string());
    }
    seen.sort();
    assert_eq!(seen, vec!["entity-0", "entity-1", "entity-2", "entity-3"]);
}
