//! The main config loading module for jekyll-publisher.
//!
//! Handles loading and deserializing settings from `config.toml`.
//!
//! [RawConfig] is what serde reads; [Config] is what the rest of the application holds on to.

use crate::config::{General, Keys, Theme};

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    keys: Keys,
}

#[derive(Debug, Default, Clone)]
pub struct Config {
    general: General,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Loads the configuration from [Config::default_path].
    ///
    /// Called once at startup, before the terminal is taken over.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Self::default(),
        }
    }

    /// Loads the configuration at `path`, falling back to defaults if it cannot be read or
    /// parsed.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("Error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// `<config dir>/jekyll-publisher/config.toml`, e.g. `~/.config/jekyll-publisher/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jekyll-publisher").join("config.toml"))
    }
}
