//! Debug logging of outgoing envelopes.
//!
//! Logging never affects construction: an encode failure is reported at
//! `warn` and swallowed.

use tracing::{debug, warn};

use crate::protocol::Envelope;

/// Label used when the caller has none.
pub const DEFAULT_LOG_LABEL: &str = "message";

/// Emit the envelope as compact JSON at `debug` level.
pub fn log_message(envelope: &Envelope, label: &str) {
    match envelope.to_json() {
        Ok(payload) => debug!(label, api = envelope.api(), %payload, "outgoing envelope"),
        Err(e) => warn!(label, error = %e, "failed to encode envelope for logging"),
    }
}
