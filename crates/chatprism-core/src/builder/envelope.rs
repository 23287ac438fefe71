//! Envelope builders.

use tracing::trace;

use crate::error::{ChatPrismError, Result};
use crate::protocol::{BroadcastData, Envelope, PrivateMessageData, TextComponent, PRIVATE_ECHO};

/// Wrap components into a broadcast envelope.
///
/// The first component becomes the root; when more follow, they become the
/// root's `extra` in order (one level, no regrouping). A single component is
/// sent as-is with no `extra`.
///
/// Fails with `InvalidArgument` on an empty list.
pub fn create_broadcast_message(components: Vec<TextComponent>) -> Result<Envelope> {
    let mut iter = components.into_iter();
    let mut root = iter
        .next()
        .ok_or_else(|| ChatPrismError::InvalidArgument("components must not be empty".into()))?;

    let rest: Vec<TextComponent> = iter.collect();
    trace!(siblings = rest.len(), "building broadcast envelope");
    if !rest.is_empty() {
        root.extra = Some(rest);
    }

    Ok(Envelope::Broadcast {
        data: BroadcastData { message: root },
    })
}

/// Wrap a component into a private-message envelope addressed to `uuid`.
///
/// `uuid` is not checked for well-formedness.
pub fn create_private_message(uuid: &str, component: TextComponent, nickname: &str) -> Envelope {
    Envelope::PrivateMessage {
        data: PrivateMessageData {
            uuid: uuid.into(),
            nickname: nickname.into(),
            message: component,
        },
        echo: PRIVATE_ECHO.into(),
    }
}
