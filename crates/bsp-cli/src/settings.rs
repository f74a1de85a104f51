//! Generator settings from a JSON file and command-line overrides

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use bsp_core::GeneratorConfig;

/// Values given on the command line, each overriding the file or default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub min_room_size: Option<i32>,
    pub seed: Option<u64>,
}

/// Read a configuration file; fields left out take their defaults
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<GeneratorConfig> {
    Ok(serde_json::from_str(text)?)
}

/// Build the final configuration and check it
pub fn resolve(base: Option<GeneratorConfig>, overrides: &Overrides) -> Result<GeneratorConfig> {
    let mut config = base.unwrap_or_default();
    if let Some(width) = overrides.width {
        config.width = width;
    }
    if let Some(height) = overrides.height {
        config.height = height;
    }
    if let Some(min_room_size) = overrides.min_room_size {
        config.min_room_size = min_room_size;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }
    config.validate().context("invalid generator settings")?;
    Ok(config)
}
