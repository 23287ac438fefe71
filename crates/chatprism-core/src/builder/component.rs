//! Text component factory and event decorators.

use crate::protocol::{ClickEvent, HoverEvent, TextComponent};

/// Color of a component built with default styling.
pub const DEFAULT_COLOR: &str = "white";
/// Hover text color used when the caller has no preference.
pub const DEFAULT_HOVER_COLOR: &str = "aqua";
pub const DEFAULT_HOVER_BOLD: bool = true;
/// Click action used when the caller has no preference. Stored lower-cased.
pub const DEFAULT_CLICK_ACTION: &str = "OPEN_URL";

/// Style options for [`create_text_event`].
///
/// Empty `font` / `insertion` are treated like `None` and left off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
    pub font: Option<String>,
    pub insertion: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.into(),
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
            font: None,
            insertion: None,
        }
    }
}

impl TextStyle {
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    pub fn obfuscated(mut self, obfuscated: bool) -> Self {
        self.obfuscated = obfuscated;
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }
}

/// Build a fresh styled node with no `extra`, hover, or click event.
///
/// Never fails; an empty `text` is a valid node.
pub fn create_text_event(text: impl Into<String>, style: &TextStyle) -> TextComponent {
    TextComponent {
        text: text.into(),
        color: style.color.clone(),
        bold: style.bold,
        italic: style.italic,
        underlined: style.underlined,
        strikethrough: style.strikethrough,
        obfuscated: style.obfuscated,
        font: non_empty(style.font.as_deref()),
        insertion: non_empty(style.insertion.as_deref()),
        hover_event: None,
        click_event: None,
        extra: None,
    }
}

/// Set (or replace) the node's `show_text` hover. Returns the same node.
pub fn add_hover_event<'a>(
    component: &'a mut TextComponent,
    hover_text: &str,
    hover_color: &str,
    hover_bold: bool,
) -> &'a mut TextComponent {
    component.hover_event = Some(HoverEvent::show_text(hover_text, hover_color, hover_bold));
    component
}

/// Set (or replace) the node's click event. `action` is lower-cased.
/// Returns the same node.
pub fn add_click_event<'a>(
    component: &'a mut TextComponent,
    value: &str,
    action: &str,
) -> &'a mut TextComponent {
    component.click_event = Some(ClickEvent::new(action, value));
    component
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.is_empty()).map(str::to_owned)
}
