//! Text component tree (JSON chat formatting).
//!
//! Colors and click actions stay plain strings: the receiving server decides
//! which values it understands.

use serde::{Deserialize, Serialize};

/// One styled, optionally interactive node of rendered chat text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    pub text: String,
    /// Named color or `#RRGGBB`.
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Text inserted into the chat box on shift-click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ClickEvent>,
    /// Sibling nodes rendered after this one. Never `Some(vec![])`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Vec<TextComponent>>,
}

/// Hover behavior. Only `show_text` is produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverEvent {
    pub action: HoverAction,
    pub contents: HoverContents,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoverAction {
    ShowText,
}

/// Styled text shown inside a hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverContents {
    pub text: String,
    pub color: String,
    pub bold: bool,
}

/// Click behavior. `action` is stored lower-cased (`open_url`,
/// `suggest_command`, ...) and is not checked against a fixed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub action: String,
    pub value: String,
}

impl HoverEvent {
    /// A `show_text` hover with the given styled text.
    pub fn show_text(text: impl Into<String>, color: impl Into<String>, bold: bool) -> Self {
        Self {
            action: HoverAction::ShowText,
            contents: HoverContents {
                text: text.into(),
                color: color.into(),
                bold,
            },
        }
    }
}

impl ClickEvent {
    /// Build a click event, lower-casing `action`.
    pub fn new(action: &str, value: impl Into<String>) -> Self {
        Self {
            action: action.to_lowercase(),
            value: value.into(),
        }
    }
}

impl TextComponent {
    /// Sibling nodes, or an empty slice when there are none.
    pub fn extra(&self) -> &[TextComponent] {
        self.extra.as_deref().unwrap_or(&[])
    }
}
