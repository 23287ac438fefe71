//! Inbound relay commands (one JSON object per line).
//!
//! ```json
//! {"type":"simple","message":"hi","sender":"bob"}
//! {"type":"rich","text":"look","images":["https://example.org/a.png"]}
//! {"type":"admin","text":"restart at 22:00","click_value":"/vote"}
//! {"type":"private","uuid":"...","nickname":"Notch","message":{"text":"psst"}}
//! {"type":"broadcast","components":[{"text":"a"},{"text":"b","color":"gold"}]}
//! ```
//!
//! Options a command leaves out fall back to `presets` from the config.

use serde::Deserialize;

use chatprism_core::builder::{
    add_click_event, add_hover_event, create_admin_announcement, create_broadcast_message,
    create_private_message, create_rich_broadcast, create_simple_broadcast, create_text_event,
    AdminAnnouncement, RichBroadcast, TextStyle, DEFAULT_CLICK_ACTION, DEFAULT_COLOR,
    DEFAULT_HOVER_BOLD, DEFAULT_HOVER_COLOR,
};
use chatprism_core::error::{ChatPrismError, Result};
use chatprism_core::protocol::{Envelope, TextComponent};

use crate::config::PresetsConfig;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Command {
    Simple {
        message: String,
        #[serde(default)]
        sender: Option<String>,
    },
    Rich {
        text: String,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        click_url: String,
        #[serde(default)]
        hover_text: String,
        #[serde(default)]
        images: Vec<Option<String>>,
        #[serde(default)]
        click_action: Option<String>,
    },
    Admin {
        text: String,
        #[serde(default)]
        click_value: String,
        #[serde(default)]
        hover_text: String,
        #[serde(default)]
        click_action: Option<String>,
    },
    Private {
        uuid: String,
        #[serde(default)]
        nickname: String,
        message: ComponentSpec,
    },
    Broadcast { components: Vec<ComponentSpec> },
}

/// A hand-built component, for `private` and `broadcast` commands.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underlined: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub obfuscated: bool,
    #[serde(default)]
    pub font: Option<String>,
    #[serde(default)]
    pub insertion: Option<String>,
    #[serde(default)]
    pub hover: Option<HoverSpec>,
    #[serde(default)]
    pub click: Option<ClickSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HoverSpec {
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClickSpec {
    pub value: String,
    #[serde(default)]
    pub action: Option<String>,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line)
            .map_err(|e| ChatPrismError::BadRequest(format!("invalid command: {e}")))
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Simple { .. } => "simple",
            Command::Rich { .. } => "rich",
            Command::Admin { .. } => "admin",
            Command::Private { .. } => "private",
            Command::Broadcast { .. } => "broadcast",
        }
    }

    pub fn build(self, presets: &PresetsConfig) -> Result<Envelope> {
        match self {
            Command::Simple { message, sender } => {
                create_simple_broadcast(&message, sender.as_deref())
            }
            Command::Rich {
                text,
                color,
                bold,
                click_url,
                hover_text,
                images,
                click_action,
            } => {
                let opts = RichBroadcast {
                    color: color.unwrap_or_else(|| presets.rich.color.clone()),
                    bold,
                    click_url,
                    hover_text,
                    images,
                    click_action: click_action.unwrap_or_else(|| presets.rich.click_action.clone()),
                };
                create_rich_broadcast(&text, &opts)
            }
            Command::Admin {
                text,
                click_value,
                hover_text,
                click_action,
            } => {
                let opts = AdminAnnouncement {
                    click_value,
                    hover_text,
                    click_action: click_action
                        .unwrap_or_else(|| presets.admin.click_action.clone()),
                };
                create_admin_announcement(&text, &opts)
            }
            Command::Private {
                uuid,
                nickname,
                message,
            } => Ok(create_private_message(&uuid, message.into_component(), &nickname)),
            Command::Broadcast { components } => create_broadcast_message(
                components
                    .into_iter()
                    .map(ComponentSpec::into_component)
                    .collect(),
            ),
        }
    }
}

impl ComponentSpec {
    pub fn into_component(self) -> TextComponent {
        let style = TextStyle {
            color: self.color.unwrap_or_else(|| DEFAULT_COLOR.into()),
            bold: self.bold,
            italic: self.italic,
            underlined: self.underlined,
            strikethrough: self.strikethrough,
            obfuscated: self.obfuscated,
            font: self.font,
            insertion: self.insertion,
        };
        let mut component = create_text_event(self.text, &style);

        if let Some(hover) = self.hover {
            add_hover_event(
                &mut component,
                &hover.text,
                hover.color.as_deref().unwrap_or(DEFAULT_HOVER_COLOR),
                hover.bold.unwrap_or(DEFAULT_HOVER_BOLD),
            );
        }
        if let Some(click) = self.click {
            add_click_event(
                &mut component,
                &click.value,
                click.action.as_deref().unwrap_or(DEFAULT_CLICK_ACTION),
            );
        }
        component
    }
}
