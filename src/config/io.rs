//! Config I/O operations: load and save.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

use super::config_struct::Config;

/// Get the config file path, creating the directory as needed.
pub fn get_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_default()
        .join("pocket-translator");
    let _ = std::fs::create_dir_all(&config_dir);
    config_dir.join("config.json")
}

/// Load config from disk, falling back to defaults on any read or parse error.
pub fn load_config() -> Config {
    load_config_from(&get_config_path())
}

pub(crate) fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }

    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            warn!("failed to read config, using defaults: {}", e);
            return Config::default();
        }
    };

    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to parse config, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Save config as pretty-printed JSON.
pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&get_config_path(), config)
}

pub(crate) fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data)
        .with_context(|| format!("failed to write config to {}", path.display()))?;
    Ok(())
}
