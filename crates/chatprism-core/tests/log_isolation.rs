//! Logging an envelope never changes or consumes it.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chatprism_core::builder::create_simple_broadcast;
use chatprism_core::log::{log_message, DEFAULT_LOG_LABEL};

#[test]
fn log_message_leaves_envelope_intact() {
    let env = create_simple_broadcast("hi", Some("bob")).unwrap();
    let before = env.clone();
    log_message(&env, DEFAULT_LOG_LABEL);
    log_message(&env, "broadcast");
    assert_eq!(env, before);
}
