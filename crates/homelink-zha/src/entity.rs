//! Bounded numeric entity.
//!
//! A `NumberEntity` exposes one device attribute to the host: its last
//! observed value, advisory bounds, unit and icon. Writes go straight to the
//! device and only change the observed value once the device confirms them.
//!
//! Two flavours exist:
//! - configuration entities, built from a fixed [`ConfigDeclaration`] and only
//!   when the device actually implements the attribute;
//! - analog outputs, whose bounds, unit, icon and name suffix come from the
//!   analog output cluster itself.

use std::sync::{Arc, Weak};

use homelink_core::NumberDefaults;
use parking_lot::{Mutex, RwLock};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::bounds::{EntityCategory, Range};
use crate::channel::{AttributeChannel, AttributeUpdate, AttributeValue, NativeType, WriteOutcome};
use crate::declarations::{analog_attrs, ConfigDeclaration, NumberDeclaration};
use crate::error::{Applied, Rejected};
use crate::host::{NumberSnapshot, StatePublisher};
use crate::{icons, units};

/// Host identity of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityIdentity {
    pub unique_id: String,
    pub name: String,
}

impl EntityIdentity {
    pub fn new(unique_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    AnalogOutput { platform_step: f64 },
    Configuration(ConfigDeclaration),
}

#[derive(Debug, Clone)]
struct Presentation {
    name: String,
    range: Range,
    unit: Option<&'static str>,
    icon: Option<&'static str>,
}

#[derive(Debug)]
struct EntityState {
    value: Option<f64>,
    presentation: Presentation,
    removed: bool,
}

struct Inner {
    identity: EntityIdentity,
    attribute: &'static str,
    kind: Kind,
    native_type: NativeType,
    category: Option<EntityCategory>,
    channel: Arc<dyn AttributeChannel>,
    publisher: Arc<dyn StatePublisher>,
    state: RwLock<EntityState>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

/// Number entity backed by one device attribute.
///
/// Cloning yields another handle to the same entity.
#[derive(Clone)]
pub struct NumberEntity {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for NumberEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberEntity")
            .field("unique_id", &self.inner.identity.unique_id)
            .field("attribute", &self.inner.attribute)
            .field("state", &*self.inner.state.read())
            .finish()
    }
}

impl NumberEntity {
    /// Build a configuration entity if the device implements the attribute.
    ///
    /// Returns `None` when the device marked the attribute unsupported, or
    /// when it has never reported a value for it. Either is an ordinary
    /// outcome of discovery.
    pub fn try_create(
        declaration: &ConfigDeclaration,
        identity: EntityIdentity,
        channel: Arc<dyn AttributeChannel>,
        publisher: Arc<dyn StatePublisher>,
    ) -> Option<Self> {
        let attribute = declaration.attribute();
        let cached = if channel.is_attribute_unsupported(attribute) {
            None
        } else {
            channel.cached_value(attribute)
        };
        let Some(cached) = cached else {
            tracing::debug!(
                "{} is not supported - skipping {} entity creation",
                attribute,
                declaration.id_suffix
            );
            return None;
        };

        let presentation = Presentation {
            name: identity.name.clone(),
            range: declaration.bounds.range(),
            unit: declaration.unit_label(),
            icon: declaration.icon_id(),
        };

        let value = cached.as_f64();
        if value.is_none() {
            tracing::warn!(
                "{}: ignoring non-numeric cached value {} of {}",
                identity.unique_id,
                cached,
                attribute
            );
        }

        Some(Self::build(
            identity,
            attribute,
            Kind::Configuration(*declaration),
            declaration.native_type,
            Some(declaration.bounds.category),
            channel,
            publisher,
            value,
            presentation,
        ))
    }

    /// Build the analog output entity of an analog output channel.
    pub fn analog_output(
        identity: EntityIdentity,
        channel: Arc<dyn AttributeChannel>,
        publisher: Arc<dyn StatePublisher>,
        defaults: &NumberDefaults,
    ) -> Self {
        let platform_step = defaults.step;
        let presentation = analog_presentation(&identity.name, channel.as_ref(), platform_step);
        let value = channel
            .cached_value(analog_attrs::PRESENT_VALUE)
            .and_then(|v| v.as_f64());

        Self::build(
            identity,
            analog_attrs::PRESENT_VALUE,
            Kind::AnalogOutput { platform_step },
            NativeType::Float,
            None,
            channel,
            publisher,
            value,
            presentation,
        )
    }

    /// Build whatever `declaration` describes.
    pub fn from_declaration(
        declaration: &NumberDeclaration,
        identity: EntityIdentity,
        channel: Arc<dyn AttributeChannel>,
        publisher: Arc<dyn StatePublisher>,
        defaults: &NumberDefaults,
    ) -> Option<Self> {
        match declaration {
            NumberDeclaration::AnalogOutput => {
                Some(Self::analog_output(identity, channel, publisher, defaults))
            }
            NumberDeclaration::Configuration(decl) => {
                Self::try_create(decl, identity, channel, publisher)
            }
        }
    }

    fn build(
        identity: EntityIdentity,
        attribute: &'static str,
        kind: Kind,
        native_type: NativeType,
        category: Option<EntityCategory>,
        channel: Arc<dyn AttributeChannel>,
        publisher: Arc<dyn StatePublisher>,
        value: Option<f64>,
        presentation: Presentation,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                identity,
                attribute,
                kind,
                native_type,
                category,
                channel,
                publisher,
                state: RwLock::new(EntityState {
                    value,
                    presentation,
                    removed: false,
                }),
                listener: Mutex::new(None),
            }),
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.inner.identity.unique_id
    }

    /// Display name, including the analog output description if any.
    pub fn name(&self) -> String {
        self.inner.state.read().presentation.name.clone()
    }

    pub fn attribute(&self) -> &'static str {
        self.inner.attribute
    }

    /// Last value observed from the device.
    pub fn current_value(&self) -> Option<f64> {
        self.inner.state.read().value
    }

    pub fn range(&self) -> Range {
        self.inner.state.read().presentation.range
    }

    pub fn min_value(&self) -> f64 {
        self.range().min
    }

    pub fn max_value(&self) -> f64 {
        self.range().max
    }

    pub fn step(&self) -> f64 {
        self.range().step
    }

    pub fn unit(&self) -> Option<&'static str> {
        self.inner.state.read().presentation.unit
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.inner.state.read().presentation.icon
    }

    pub fn category(&self) -> Option<EntityCategory> {
        self.inner.category
    }

    /// Declaration a configuration entity was built from.
    pub fn declaration(&self) -> Option<&ConfigDeclaration> {
        match &self.inner.kind {
            Kind::Configuration(decl) => Some(decl),
            Kind::AnalogOutput { .. } => None,
        }
    }

    pub fn native_type(&self) -> NativeType {
        self.inner.native_type
    }

    pub fn is_read_only(&self) -> bool {
        self.inner.category == Some(EntityCategory::Diagnostic)
    }

    pub fn is_removed(&self) -> bool {
        self.inner.state.read().removed
    }

    pub fn snapshot(&self) -> NumberSnapshot {
        self.inner.snapshot()
    }

    /// Write `requested` to the device.
    ///
    /// The value is coerced to the attribute's native type but not clamped
    /// to the advertised range. The observed value only changes once the
    /// device confirms every record of the write.
    pub async fn set_value(&self, requested: f64) -> Result<Applied, Rejected> {
        let inner = &self.inner;
        if self.is_read_only() {
            return Err(Rejected::ReadOnly);
        }
        if self.is_removed() {
            tracing::debug!("{}: entity was removed, not writing", inner.identity.unique_id);
            return Err(Rejected::Removed);
        }

        let Some((value, written)) = inner
            .native_type
            .coerce(requested)
            .and_then(|v| v.as_f64().map(|n| (v, n)))
        else {
            tracing::warn!("{}: cannot write value {}", inner.identity.unique_id, requested);
            return Err(Rejected::InvalidValue(requested));
        };

        let outcome = match inner.channel.write_attribute(inner.attribute, value).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{}: Could not set value: {}", inner.identity.unique_id, e);
                return Err(Rejected::Transport(e));
            }
        };

        if !outcome.is_success() {
            let statuses = match outcome {
                WriteOutcome::PartialFailure(statuses) => statuses,
                WriteOutcome::Success => Vec::new(),
            };
            tracing::warn!(
                "{}: device rejected write of {}={}: {:?}",
                inner.identity.unique_id,
                inner.attribute,
                written,
                statuses
            );
            return Err(Rejected::PartialFailure(statuses));
        }

        {
            let mut state = inner.state.write();
            if state.removed {
                tracing::debug!(
                    "{}: discarding write result, entity was removed",
                    inner.identity.unique_id
                );
                return Err(Rejected::Removed);
            }
            state.value = Some(written);
        }
        inner.publish();
        Ok(Applied { value: written })
    }

    /// Poll the device for the current value, bypassing the cache.
    ///
    /// Failures are logged; the previous value is kept.
    pub async fn refresh(&self) {
        let inner = &self.inner;
        tracing::debug!("polling current state");
        match inner.channel.read_attribute(inner.attribute).await {
            Ok(Some(value)) => {
                tracing::debug!("read value={}", value);
                {
                    let mut state = inner.state.write();
                    if state.removed {
                        return;
                    }
                    match value.as_f64() {
                        Some(number) => state.value = Some(number),
                        None => tracing::warn!(
                            "{}: ignoring non-numeric value {} of {}",
                            inner.identity.unique_id,
                            value,
                            inner.attribute
                        ),
                    }
                    if let Kind::AnalogOutput { platform_step } = inner.kind {
                        state.presentation = analog_presentation(
                            &inner.identity.name,
                            inner.channel.as_ref(),
                            platform_step,
                        );
                    }
                }
                inner.publish();
            }
            Ok(None) => {
                tracing::debug!("read value=None");
            }
            Err(e) => {
                tracing::warn!("{}: failed to read {}: {}", inner.identity.unique_id, inner.attribute, e);
            }
        }
    }

    /// Start listening for attribute reports.
    ///
    /// Must run inside a tokio runtime. Calling it again is a no-op. The
    /// listener only holds a weak reference and stops once every handle to
    /// the entity is dropped.
    pub async fn added_to_host(&self) {
        {
            let mut listener = self.inner.listener.lock();
            if listener.is_some() || self.is_removed() {
                return;
            }
            let mut rx = self.inner.channel.subscribe();
            let weak = Arc::downgrade(&self.inner);
            *listener = Some(tokio::spawn(async move {
                loop {
                    let received = rx.recv().await;
                    let Some(inner) = Weak::upgrade(&weak) else {
                        break;
                    };
                    match received {
                        Ok(update) => inner.handle_update(update),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(
                                "{}: missed {} attribute reports",
                                inner.identity.unique_id,
                                skipped
                            );
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
            }));
        }
        self.inner.publisher.entity_added(self.unique_id());
    }

    /// Stop listening and mark the entity removed.
    ///
    /// Writes still in flight complete on the device but no longer touch
    /// this entity.
    pub async fn will_remove_from_host(&self) {
        self.inner.state.write().removed = true;
        if let Some(handle) = self.inner.listener.lock().take() {
            handle.abort();
        }
        self.inner.publisher.entity_removed(self.unique_id());
    }
}

impl Inner {
    fn snapshot(&self) -> NumberSnapshot {
        let state = self.state.read();
        NumberSnapshot {
            unique_id: self.identity.unique_id.clone(),
            name: state.presentation.name.clone(),
            value: state.value,
            min: state.presentation.range.min,
            max: state.presentation.range.max,
            step: state.presentation.range.step,
            unit: state.presentation.unit.map(str::to_string),
            icon: state.presentation.icon.map(str::to_string),
            category: self.category,
            read_only: self.category == Some(EntityCategory::Diagnostic),
        }
    }

    fn publish(&self) {
        self.publisher.publish_state(&self.snapshot());
    }

    /// Every report re-publishes state, even for other attributes of the
    /// channel.
    fn handle_update(&self, update: AttributeUpdate) {
        {
            let mut state = self.state.write();
            if state.removed {
                return;
            }
            if update.attribute == self.attribute {
                match update.value.as_f64() {
                    Some(number) => state.value = Some(number),
                    None => tracing::warn!(
                        "{}: ignoring non-numeric report {} of {}",
                        self.identity.unique_id,
                        update.value,
                        self.attribute
                    ),
                }
            }
            if let Kind::AnalogOutput { platform_step } = self.kind {
                if analog_attrs::PRESENTATION.iter().any(|a| *a == update.attribute) {
                    state.presentation =
                        analog_presentation(&self.identity.name, self.channel.as_ref(), platform_step);
                }
            }
        }
        self.publish();
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.listener.get_mut().take() {
            handle.abort();
        }
    }
}

fn analog_presentation(
    base_name: &str,
    channel: &dyn AttributeChannel,
    platform_step: f64,
) -> Presentation {
    let number = |attribute: &str| channel.cached_value(attribute).and_then(|v| v.as_f64());
    let code = |attribute: &str| {
        channel
            .cached_value(attribute)
            .and_then(|v| v.as_i64())
    };

    let range = Range::analog_output(
        number(analog_attrs::MIN_PRESENT_VALUE),
        number(analog_attrs::MAX_PRESENT_VALUE),
        number(analog_attrs::RESOLUTION),
        platform_step,
    );

    let name = match channel.cached_value(analog_attrs::DESCRIPTION) {
        Some(AttributeValue::String(description)) if !description.is_empty() => {
            format!("{} {}", base_name, description)
        }
        _ => base_name.to_string(),
    };

    let icon = code(analog_attrs::APPLICATION_TYPE).and_then(icons::application_type_icon);
    let unit = code(analog_attrs::ENGINEERING_UNITS)
        .and_then(|c| u16::try_from(c).ok())
        .and_then(units::unit_label);

    Presentation {
        name,
        range,
        unit,
        icon,
    }
}
