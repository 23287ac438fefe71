//! chatprism core: rich-text chat components and the envelopes that carry them.
//!
//! This crate builds the JSON "text component" trees used by the chat bridge
//! and wraps them into `broadcast` / `send_private_msg` envelopes. It performs
//! no I/O: the transport that delivers an envelope lives in `chatprism-relay`
//! or in whatever host embeds this crate.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The only builder failure (an envelope from zero components) surfaces as
//! `ChatPrismError::InvalidArgument`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod builder;
pub mod error;
pub mod log;
pub mod protocol;

/// Shared result type.
pub use error::{ChatPrismError, Result};
