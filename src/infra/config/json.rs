use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::config::PresentationConfig;
use crate::error::TableError;

/// Parses one presentation layer. Missing fields stay unset.
pub fn parse_layer(text: &str) -> std::result::Result<PresentationConfig, TableError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_layer(path: &Path) -> Result<PresentationConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config layer: {}", path.display()))?;
    let layer = parse_layer(&text)
        .with_context(|| format!("failed to parse config layer: {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded presentation layer");
    Ok(layer)
}
