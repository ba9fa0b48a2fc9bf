//! Device-driven presentation of tagged widgets.
//!
//! The host owns the widgets; this crate only sees them through the
//! [`TagStore`] and [`Widget`] traits. [`PresentationUpdater::refresh`]
//! applies the visibility rule to the device-visibility tag and the mobile
//! scaling rule to the mobile-scale tag.

pub mod host;
pub mod memory;
pub mod scaling;
pub mod updater;
pub mod viewport;
pub mod visibility;

pub use host::{
    AttributeValue, ImageResolver, ScaleTransform, TagStore, Widget, WidgetKind, WidgetRef,
    CONTROLLER_BUTTON_ATTR, ORIGINAL_SCALE_ATTR,
};
pub use updater::{PresentationHost, PresentationUpdater};
pub use viewport::{ViewportChain, ViewportHost, ViewportSource, DEFAULT_VIEWPORT};
