//! Zigbee number entities.
//!
//! Exposes Zigbee device attributes (analog outputs, level control
//! transition times, filter lifetimes, ...) as bounded numeric entities.
//!
//! ## Architecture
//!
//! - **Tables** (`units`, `icons`): engineering unit labels and application
//!   type icons
//! - **Declarations** (`declarations`): fixed bounds per attribute and the
//!   registry matching them to device channels
//! - **NumberEntity** (`entity`): the value object the host renders and writes
//! - **AttributeChannel** (`channel`): the Zigbee stack, behind a trait
//! - **NumberPlatform** (`platform`): builds entities for a discovered device

pub mod bounds;
pub mod channel;
pub mod declarations;
pub mod entity;
pub mod error;
pub mod host;
pub mod icons;
pub mod platform;
pub mod units;

pub use bounds::{AttributeBounds, BoundsError, EntityCategory, Range};
pub use channel::{
    AttributeChannel, AttributeUpdate, AttributeValue, ChannelError, NativeType, Status,
    WriteOutcome,
};
pub use declarations::{
    ConfigDeclaration, DeclarationRegistry, DeviceSignature, MatchRule, NumberDeclaration,
    RegistryEntry,
};
pub use entity::{EntityIdentity, NumberEntity};
pub use error::{Applied, Rejected};
pub use host::{NumberSnapshot, StatePublisher};
pub use icons::icon_for;
pub use platform::NumberPlatform;
pub use units::unit_label;
