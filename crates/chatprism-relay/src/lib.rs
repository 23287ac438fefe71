//! chatprism relay library entry.
//!
//! Wires strict config, inbound JSON-line commands, the core builders, and an
//! [`EnvelopeSink`](sink::EnvelopeSink) into a small relay. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod command;
pub mod config;
pub mod relay;
pub mod sink;

pub use relay::Relay;
