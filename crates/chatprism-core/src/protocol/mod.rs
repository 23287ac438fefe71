//! Protocol modules (text components + delivery envelopes).
//!
//! - `component`: the styled text node tree and its hover/click events.
//! - `envelope`: the outer `api`-tagged message handed to the transport.
//!
//! Field names and casing here are the wire contract; do not rename them.

pub mod component;
pub mod envelope;

pub use component::{ClickEvent, HoverAction, HoverContents, HoverEvent, TextComponent};
pub use envelope::{
    BroadcastData, Envelope, PreparedEnvelope, PrivateMessageData, API_BROADCAST,
    API_SEND_PRIVATE_MSG, PRIVATE_ECHO,
};
