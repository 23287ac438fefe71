//! Relay config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use chatprism_core::error::{ChatPrismError, Result};

pub use schema::{AdminPreset, PresetsConfig, RelayConfig, RelaySection, RichPreset};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<RelayConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        ChatPrismError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RelayConfig> {
    let cfg: RelayConfig = serde_yaml::from_str(s)
        .map_err(|e| ChatPrismError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
