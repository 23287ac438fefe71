//! Delivery envelopes (JSON).
//!
//! Two shapes, distinguished on the wire only by `api`:
//! - `{"api":"broadcast","data":{"message":...}}`
//! - `{"api":"send_private_msg","data":{"uuid","nickname","message"},"echo":"1"}`

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::{ChatPrismError, Result};
use crate::protocol::component::TextComponent;

/// `api` value of a broadcast envelope.
pub const API_BROADCAST: &str = "broadcast";
/// `api` value of a private-message envelope.
pub const API_SEND_PRIVATE_MSG: &str = "send_private_msg";
/// `echo` value carried by private messages.
pub const PRIVATE_ECHO: &str = "1";

/// Outer protocol message handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "api")]
pub enum Envelope {
    #[serde(rename = "broadcast")]
    Broadcast { data: BroadcastData },
    #[serde(rename = "send_private_msg")]
    PrivateMessage {
        data: PrivateMessageData,
        echo: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BroadcastData {
    /// Root component; siblings live in its `extra`.
    pub message: TextComponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivateMessageData {
    /// Recipient id. Passed through unchecked.
    pub uuid: String,
    pub nickname: String,
    pub message: TextComponent,
}

impl Envelope {
    /// The `api` tag this envelope serializes with.
    pub fn api(&self) -> &'static str {
        match self {
            Envelope::Broadcast { .. } => API_BROADCAST,
            Envelope::PrivateMessage { .. } => API_SEND_PRIVATE_MSG,
        }
    }

    /// Root text component.
    pub fn message(&self) -> &TextComponent {
        match self {
            Envelope::Broadcast { data } => &data.message,
            Envelope::PrivateMessage { data, .. } => &data.message,
        }
    }

    /// Compact JSON. Non-ASCII text is kept as-is (no `\u` escapes).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ChatPrismError::Internal(format!("json encode failed: {e}")))
    }
}

/// Envelope serialized once, cheap to clone for fan-out to several sinks.
#[derive(Debug, Clone)]
pub struct PreparedEnvelope {
    pub api: &'static str,
    pub bytes: Bytes,
}

impl PreparedEnvelope {
    pub fn prepare(env: &Envelope) -> Result<Self> {
        let s = env.to_json()?;
        Ok(Self {
            api: env.api(),
            bytes: Bytes::from(s),
        })
    }

    /// JSON text of the envelope.
    pub fn as_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes)
            .map_err(|e| ChatPrismError::Internal(format!("utf8 invalid: {e}")))
    }
}
