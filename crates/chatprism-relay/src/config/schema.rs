use serde::Deserialize;

use chatprism_core::builder::{AdminAnnouncement, RichBroadcast};
use chatprism_core::error::{ChatPrismError, Result};
use chatprism_core::log::DEFAULT_LOG_LABEL;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    pub version: u32,

    #[serde(default)]
    pub relay: RelaySection,

    #[serde(default)]
    pub presets: PresetsConfig,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            relay: RelaySection::default(),
            presets: PresetsConfig::default(),
        }
    }
}

impl RelayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChatPrismError::UnsupportedVersion);
        }
        self.relay.validate()?;
        self.presets.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySection {
    /// Label attached to every outgoing-envelope debug event.
    #[serde(default = "default_log_label")]
    pub log_label: String,

    #[serde(default = "default_true")]
    pub log_outgoing: bool,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            log_label: default_log_label(),
            log_outgoing: true,
        }
    }
}

impl RelaySection {
    pub fn validate(&self) -> Result<()> {
        if self.log_label.trim().is_empty() {
            return Err(ChatPrismError::BadRequest(
                "relay.log_label must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_log_label() -> String {
    DEFAULT_LOG_LABEL.into()
}
fn default_true() -> bool {
    true
}

/// Defaults applied when a command leaves a preset option out.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetsConfig {
    #[serde(default)]
    pub rich: RichPreset,

    #[serde(default)]
    pub admin: AdminPreset,
}

impl PresetsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rich.color.is_empty() {
            return Err(ChatPrismError::BadRequest(
                "presets.rich.color must not be empty".into(),
            ));
        }
        if self.rich.click_action.is_empty() {
            return Err(ChatPrismError::BadRequest(
                "presets.rich.click_action must not be empty".into(),
            ));
        }
        if self.admin.click_action.is_empty() {
            return Err(ChatPrismError::BadRequest(
                "presets.admin.click_action must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RichPreset {
    #[serde(default = "default_rich_color")]
    pub color: String,

    #[serde(default = "default_rich_click_action")]
    pub click_action: String,
}

impl Default for RichPreset {
    fn default() -> Self {
        Self {
            color: default_rich_color(),
            click_action: default_rich_click_action(),
        }
    }
}

fn default_rich_color() -> String {
    RichBroadcast::default().color
}
fn default_rich_click_action() -> String {
    RichBroadcast::default().click_action
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminPreset {
    #[serde(default = "default_admin_click_action")]
    pub click_action: String,
}

impl Default for AdminPreset {
    fn default() -> Self {
        Self {
            click_action: default_admin_click_action(),
        }
    }
}

fn default_admin_click_action() -> String {
    AdminAnnouncement::default().click_action
}
