use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::disclaimer_text::DISCLAIMER_VERSION;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GeneralConfig {
    #[serde(default)]
    pub disclaimer_accepted: bool,
    #[serde(default)]
    pub disclaimer_accepted_version: String,
    #[serde(default)]
    pub disclaimer_accepted_at: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> f32 {
    560.0
}

fn default_height() -> f32 {
    640.0
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();

        let content = fs::read_to_string(&config_path)
            .context(format!("Failed to read config.toml at {:?}", config_path))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config.toml")?;

        Ok(config)
    }

    pub fn try_load() -> Option<Self> {
        let config_path = get_config_path();
        if !config_path.exists() {
            return None;
        }
        Self::load().ok()
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path();
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, content).context("Failed to write config.toml")?;

        Ok(())
    }

    /// A stored acceptance only counts for the disclaimer text it was given
    /// for. A version bump in the copy invalidates it.
    pub fn needs_consent(&self) -> bool {
        !self.general.disclaimer_accepted
            || self.general.disclaimer_accepted_version != DISCLAIMER_VERSION
    }

    pub fn record_acceptance(&mut self) {
        self.general.disclaimer_accepted = true;
        self.general.disclaimer_accepted_version = DISCLAIMER_VERSION.to_string();
        self.general.disclaimer_accepted_at = chrono::Utc::now().to_rfc3339();
    }
}

pub fn get_exe_dir() -> std::path::PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

pub fn get_config_path() -> std::path::PathBuf {
    let exe_dir = get_exe_dir();
    let config_path = exe_dir.join("config").join("config.toml");

    if config_path.exists() {
        return config_path;
    }

    let cwd_config = std::path::PathBuf::from("config/config.toml");
    if cwd_config.exists() {
        return cwd_config;
    }

    config_path
}

pub fn ensure_directories() -> Result<()> {
    let exe_dir = get_exe_dir();

    let config_dir = exe_dir.join("config");
    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    let data_dir = exe_dir.join("data");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_require_consent() {
        let config = Config::default();
        assert!(!config.general.disclaimer_accepted);
        assert!(config.needs_consent());
    }

    #[test]
    fn test_partial_toml_parses_with_defaults() {
        let config: Config = toml::from_str("[window]\nwidth = 700.0\n").unwrap();
        assert_eq!(config.window.width, 700.0);
        assert_eq!(config.window.height, default_height());
        assert!(config.needs_consent());
    }

    #[test]
    fn test_record_acceptance() {
        let mut config = Config::default();
        config.record_acceptance();
        assert!(!config.needs_consent());
        assert_eq!(
            config.general.disclaimer_accepted_version,
            DISCLAIMER_VERSION
        );
        assert!(!config.general.disclaimer_accepted_at.is_empty());
    }

    #[test]
    fn test_stale_acceptance_requires_consent_again() {
        let mut config = Config::default();
        config.general.disclaimer_accepted = true;
        config.general.disclaimer_accepted_version = "0.0.1".to_string();
        assert!(config.needs_consent());
    }
}
