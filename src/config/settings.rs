//! Application configuration

use anyhow::Result;
use pi_panels_types::{GpioConfig, ThermalConfig, VideoConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
///
/// Every section falls back to its defaults, so an absent file or a file
/// holding only `{"gpio": {"pin": 4}}` are both valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub gpio: GpioConfig,
    #[serde(default)]
    pub thermal: ThermalConfig,
    #[serde(default)]
    pub video: VideoConfig,
}

fn default_version() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Load from `path` if given, otherwise from the default location
    ///
    /// Failures are logged and fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        };
        match result {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.pi_panels", "pi-panels")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            gpio: GpioConfig::default(),
            thermal: ThermalConfig::default(),
            video: VideoConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");

        let mut config = AppConfig::default();
        config.gpio.pin = 22;
        config.thermal.update_interval_ms = 2000;
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"gpio": {"pin": 4}}"#).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.gpio.pin, 4);
        assert_eq!(loaded.thermal, ThermalConfig::default());
        assert_eq!(loaded.video.width, 640);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(AppConfig::load_from_path(&path).is_err());
        assert_eq!(AppConfig::load_or_default(Some(&path)), AppConfig::default());
    }
}
