//! Number platform setup.
//!
//! Discovery hands the platform a device and its channels; the platform
//! walks the declaration registry, runs the factories and returns the
//! entities the host should register.

use std::sync::Arc;

use futures::future::join_all;
use homelink_core::NumberDefaults;

use crate::channel::AttributeChannel;
use crate::declarations::{DeclarationRegistry, DeviceSignature, NumberDeclaration};
use crate::entity::{EntityIdentity, NumberEntity};
use crate::host::StatePublisher;

pub struct NumberPlatform {
    registry: DeclarationRegistry,
    defaults: NumberDefaults,
    publisher: Arc<dyn StatePublisher>,
}

impl NumberPlatform {
    pub fn new(
        registry: DeclarationRegistry,
        defaults: NumberDefaults,
        publisher: Arc<dyn StatePublisher>,
    ) -> Self {
        Self {
            registry,
            defaults,
            publisher,
        }
    }

    /// Platform with the built-in declarations and environment defaults.
    pub fn builtin(publisher: Arc<dyn StatePublisher>) -> Self {
        Self::new(
            DeclarationRegistry::builtin(),
            NumberDefaults::from_env(),
            publisher,
        )
    }

    pub fn registry(&self) -> &DeclarationRegistry {
        &self.registry
    }

    pub fn defaults(&self) -> &NumberDefaults {
        &self.defaults
    }

    /// Build every supported number entity of `device`.
    pub fn create_entities(
        &self,
        device: &DeviceSignature,
        channels: &[Arc<dyn AttributeChannel>],
    ) -> Vec<NumberEntity> {
        let mut entities = Vec::new();
        for channel in channels {
            for declaration in self.registry.matching(channel.name(), device) {
                let identity = identity_for(declaration, device, channel.as_ref());
                if let Some(entity) = NumberEntity::from_declaration(
                    declaration,
                    identity,
                    Arc::clone(channel),
                    Arc::clone(&self.publisher),
                    &self.defaults,
                ) {
                    entities.push(entity);
                }
            }
        }
        tracing::debug!(
            "Created {} number entities for {}",
            entities.len(),
            device.display_name()
        );
        entities
    }

    /// Create the entities of `device` and attach them to the host.
    pub async fn setup_device(
        &self,
        device: &DeviceSignature,
        channels: &[Arc<dyn AttributeChannel>],
    ) -> Vec<NumberEntity> {
        let entities = self.create_entities(device, channels);
        join_all(entities.iter().map(|e| e.added_to_host())).await;
        entities
    }

    /// Detach every entity, e.g. when the config entry unloads.
    pub async fn unload(&self, entities: &[NumberEntity]) {
        join_all(entities.iter().map(|e| e.will_remove_from_host())).await;
    }
}

fn identity_for(
    declaration: &NumberDeclaration,
    device: &DeviceSignature,
    channel: &dyn AttributeChannel,
) -> EntityIdentity {
    match declaration {
        NumberDeclaration::AnalogOutput => {
            EntityIdentity::new(channel.unique_id(), device.display_name())
        }
        NumberDeclaration::Configuration(decl) => EntityIdentity::new(
            format!("{}-{}", channel.unique_id(), decl.id_suffix),
            format!("{} {}", device.display_name(), decl.display_name),
        ),
    }
}
