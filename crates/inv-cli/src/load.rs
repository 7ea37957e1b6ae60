//! Reading presets from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use inv_model::Preset;
use tracing::debug;

/// Load a preset from a JSON file.
pub fn load_preset(path: &Path) -> Result<Preset> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read preset {}", path.display()))?;
    let preset = parse_preset(&text).with_context(|| format!("parse preset {}", path.display()))?;
    debug!(
        path = %path.display(),
        preset = %preset.name,
        pages = preset.pages.len(),
        "loaded preset"
    );
    Ok(preset)
}

pub fn parse_preset(text: &str) -> Result<Preset> {
    let preset = serde_json::from_str(text)?;
    Ok(preset)
}
