//! Preset composers for the common message kinds.
//!
//! Each preset always supplies at least one component, so the empty-list
//! error of [`create_broadcast_message`] cannot surface through them; the
//! `Result` is kept so callers handle every envelope builder the same way.

use crate::builder::component::{add_click_event, add_hover_event, create_text_event, TextStyle};
use crate::builder::envelope::create_broadcast_message;
use crate::error::Result;
use crate::protocol::Envelope;

/// Label of each image attachment in a rich broadcast.
pub const IMAGE_LABEL: &str = " [图片]";
/// Fixed prefix of an admin announcement.
pub const ADMIN_PREFIX: &str = "[管理员公告] ";

const PRESET_HOVER_COLOR: &str = "gold";
const IMAGE_COLOR: &str = "gray";
const IMAGE_CLICK_ACTION: &str = "OPEN_URL";
const ADMIN_PREFIX_COLOR: &str = "red";

/// `"{sender}: {message}"` when a non-empty sender is given, else `message`.
pub fn create_simple_broadcast(message: &str, sender: Option<&str>) -> Result<Envelope> {
    let text = match sender.filter(|s| !s.is_empty()) {
        Some(sender) => format!("{sender}: {message}"),
        None => message.to_owned(),
    };
    create_broadcast_message(vec![create_text_event(text, &TextStyle::default())])
}

/// Options for [`create_rich_broadcast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichBroadcast {
    pub color: String,
    pub bold: bool,
    /// Click target of the main text; empty means no click event.
    pub click_url: String,
    /// Hover text of the main text; empty means no hover.
    pub hover_text: String,
    /// Image URLs. `None` and empty entries are skipped.
    pub images: Vec<Option<String>>,
    pub click_action: String,
}

impl Default for RichBroadcast {
    fn default() -> Self {
        Self {
            color: "#E6E6FA".into(),
            bold: false,
            click_url: String::new(),
            hover_text: String::new(),
            images: Vec::new(),
            click_action: "OPEN_URL".into(),
        }
    }
}

/// Styled main text followed by one clickable `[图片]` link per image URL.
pub fn create_rich_broadcast(text: &str, opts: &RichBroadcast) -> Result<Envelope> {
    let mut main = create_text_event(
        text,
        &TextStyle::default().color(opts.color.as_str()).bold(opts.bold),
    );
    if !opts.hover_text.is_empty() {
        add_hover_event(&mut main, &opts.hover_text, PRESET_HOVER_COLOR, true);
    }
    if !opts.click_url.is_empty() {
        add_click_event(&mut main, &opts.click_url, &opts.click_action);
    }

    let image_style = TextStyle::default().color(IMAGE_COLOR).underlined(true);
    let images = opts
        .images
        .iter()
        .filter_map(|url| url.as_deref().filter(|u| !u.is_empty()))
        .map(|url| {
            let mut img = create_text_event(IMAGE_LABEL, &image_style);
            add_click_event(&mut img, url, IMAGE_CLICK_ACTION);
            img
        });

    let mut components = vec![main];
    components.extend(images);
    create_broadcast_message(components)
}

/// Options for [`create_admin_announcement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAnnouncement {
    /// Click value of the announcement text; empty means no click event.
    pub click_value: String,
    /// Hover text of the announcement text; empty means no hover.
    pub hover_text: String,
    pub click_action: String,
}

impl Default for AdminAnnouncement {
    fn default() -> Self {
        Self {
            click_value: String::new(),
            hover_text: String::new(),
            click_action: "SUGGEST_COMMAND".into(),
        }
    }
}

/// Bold red `[管理员公告] ` root with the announcement text as its only sibling.
pub fn create_admin_announcement(text: &str, opts: &AdminAnnouncement) -> Result<Envelope> {
    let prefix = create_text_event(
        ADMIN_PREFIX,
        &TextStyle::default().color(ADMIN_PREFIX_COLOR).bold(true),
    );

    let mut main = create_text_event(text, &TextStyle::default());
    if !opts.hover_text.is_empty() {
        add_hover_event(&mut main, &opts.hover_text, PRESET_HOVER_COLOR, true);
    }
    if !opts.click_value.is_empty() {
        add_click_event(&mut main, &opts.click_value, &opts.click_action);
    }

    create_broadcast_message(vec![prefix, main])
}
