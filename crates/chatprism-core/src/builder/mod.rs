//! Construction helpers for components and envelopes.
//!
//! Data flows one way: `create_text_event` produces a node, the `add_*`
//! decorators enrich it in place, `create_broadcast_message` /
//! `create_private_message` wrap nodes into an [`Envelope`], and the preset
//! composers chain all of the above for the common message kinds.
//!
//! Decorators take `&mut TextComponent` and hand the same node back, so calls
//! chain without copying. Envelope builders take their components by value:
//! the root's `extra` is filled from the remaining components, and the caller
//! no longer holds them afterwards.
//!
//! [`Envelope`]: crate::protocol::Envelope

pub mod component;
pub mod envelope;
pub mod presets;

pub use component::{
    add_click_event, add_hover_event, create_text_event, TextStyle, DEFAULT_CLICK_ACTION,
    DEFAULT_COLOR, DEFAULT_HOVER_BOLD, DEFAULT_HOVER_COLOR,
};
pub use envelope::{create_broadcast_message, create_private_message};
pub use presets::{
    create_admin_announcement, create_rich_broadcast, create_simple_broadcast,
    AdminAnnouncement, RichBroadcast, ADMIN_PREFIX, IMAGE_LABEL,
};
