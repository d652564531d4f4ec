// SPDX-License-Identifier: MPL-2.0
//! This module handles the extractor's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use geotag_lens::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.reject_null_island = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.reject_null_island, Some(true));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GeotagLens";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum JPEG segments visited while looking for EXIF data.
    #[serde(default)]
    pub max_segments: Option<usize>,
    /// Report an exact (0, 0) geotag as absent.
    #[serde(default)]
    pub reject_null_island: Option<bool>,
    /// Decimals used when printing coordinates.
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_segments: Some(DEFAULT_MAX_SEGMENTS),
            reject_null_island: Some(DEFAULT_REJECT_NULL_ISLAND),
            precision: Some(DEFAULT_PRECISION),
        }
    }
}

impl Config {
    /// Segment limit, clamped to the supported range.
    #[must_use]
    pub fn max_segments(&self) -> usize {
        self.max_segments
            .unwrap_or(DEFAULT_MAX_SEGMENTS)
            .clamp(MIN_MAX_SEGMENTS, MAX_MAX_SEGMENTS)
    }

    #[must_use]
    pub fn reject_null_island(&self) -> bool {
        self.reject_null_island
            .unwrap_or(DEFAULT_REJECT_NULL_ISLAND)
    }

    /// Display precision, clamped to the supported range.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
            .unwrap_or(DEFAULT_PRECISION)
            .clamp(MIN_PRECISION, MAX_PRECISION)
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

/// Reads settings from `path`. Unparseable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
