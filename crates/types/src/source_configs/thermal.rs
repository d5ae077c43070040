//! Thermal zone source configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_temp_path() -> PathBuf {
    PathBuf::from("/sys/class/thermal/thermal_zone0/temp")
}

fn default_update_interval() -> u64 {
    1000
}

fn default_caption() -> String {
    "CPU Temp".to_string()
}

/// Configuration for the thermal zone source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermalConfig {
    /// File reporting milli-degrees Celsius
    #[serde(default = "default_temp_path")]
    pub temp_path: PathBuf,
    #[serde(default = "default_update_interval")]
    pub update_interval_ms: u64,
    #[serde(default = "default_caption")]
    pub caption: String,
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            temp_path: default_temp_path(),
            update_interval_ms: default_update_interval(),
            caption: default_caption(),
        }
    }
}
