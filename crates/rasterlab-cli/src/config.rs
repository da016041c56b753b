//! Pipeline configuration from JSON files and command line flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rasterlab_core::{Mode, PipelineConfig};

/// Read a JSON config file. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&data).with_context(|| format!("Failed to parse config {}", path.display()))
}

pub fn parse_config(data: &str) -> Result<PipelineConfig> {
    Ok(serde_json::from_str(data)?)
}

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<Mode>,
    pub size: Option<usize>,
    pub title: Option<String>,
}

/// Load `path` (or the defaults when absent) and apply `overrides` on top.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(p) => load_config(p)?,
        None => PipelineConfig::default(),
    };
    if let Some(mode) = overrides.mode {
        config.mode = mode;
    }
    if let Some(size) = overrides.size {
        config.target_size = size;
    }
    if let Some(title) = overrides.title {
        config.title = title;
    }
    log::debug!("resolved config: {config:?}");
    Ok(config)
}
