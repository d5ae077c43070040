//! GPIO source configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_sysfs_root() -> PathBuf {
    PathBuf::from("/sys/class/gpio")
}

fn default_pin() -> u32 {
    17
}

/// Sysfs GPIO configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpioConfig {
    /// Root of the legacy sysfs GPIO interface
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,
    /// Kernel GPIO number (not the header pin number)
    #[serde(default = "default_pin")]
    pub pin: u32,
}

impl GpioConfig {
    pub fn export_path(&self) -> PathBuf {
        self.sysfs_root.join("export")
    }

    pub fn pin_dir(&self) -> PathBuf {
        self.sysfs_root.join(format!("gpio{}", self.pin))
    }

    pub fn direction_path(&self) -> PathBuf {
        self.pin_dir().join("direction")
    }

    pub fn value_path(&self) -> PathBuf {
        self.pin_dir().join("value")
    }
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            sysfs_root: default_sysfs_root(),
            pin: default_pin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_paths() {
        let config = GpioConfig::default();
        assert_eq!(config.export_path(), Path::new("/sys/class/gpio/export"));
        assert_eq!(
            config.direction_path(),
            Path::new("/sys/class/gpio/gpio17/direction")
        );
        assert_eq!(config.value_path(), Path::new("/sys/class/gpio/gpio17/value"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GpioConfig = serde_json::from_str(r#"{"pin": 4}"#).unwrap();
        assert_eq!(config.pin, 4);
        assert_eq!(config.sysfs_root, PathBuf::from("/sys/class/gpio"));
        assert_eq!(config.value_path(), Path::new("/sys/class/gpio/gpio4/value"));
    }
}
