// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use playback_controller::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.volume = Some(50);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;
pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PlaybackController";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Preferred playback volume in percent (0–100).
    pub volume: Option<u8>,
    #[serde(default)]
    pub muted: Option<bool>,
    /// Whether to resume playback from the last watched position.
    #[serde(default)]
    pub resume_playback: Option<bool>,
    /// Controls auto-hide timeout on desktop, in milliseconds.
    #[serde(default)]
    pub inactivity_timeout_ms: Option<u32>,
    /// Controls auto-hide timeout on touch devices, in milliseconds.
    #[serde(default)]
    pub touch_inactivity_timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            volume: Some(DEFAULT_VOLUME_PERCENT),
            muted: Some(false),
            resume_playback: Some(true),
            inactivity_timeout_ms: Some(DEFAULT_INACTIVITY_TIMEOUT_MS),
            touch_inactivity_timeout_ms: Some(TOUCH_INACTIVITY_TIMEOUT_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
