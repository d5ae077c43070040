//! Thermal zone data source implementation
//!
//! Reads a kernel thermal zone (`/sys/class/thermal/thermal_zoneN/temp`),
//! which reports milli-degrees Celsius as decimal text.

use anyhow::Result;
use pi_panels_core::{DataSource, SourceError, SourceMetadata};
use pi_panels_types::ThermalConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Text shown when the zone cannot be read or parsed
const UNAVAILABLE: &str = "N/A";

/// Read the raw milli-degree value
pub fn read_milli_celsius(path: &Path) -> Result<i32, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|e| SourceError::io(path, e))?;
    let trimmed = content.trim();
    trimmed.parse::<i32>().map_err(|_| SourceError::Parse {
        path: path.to_path_buf(),
        text: trimmed.to_string(),
    })
}

pub fn milli_to_celsius(milli: i32) -> f64 {
    milli as f64 / 1000.0
}

/// Read the zone in degrees Celsius, or None if it is unreadable
pub fn read_celsius(path: &Path) -> Option<f64> {
    match read_milli_celsius(path) {
        Ok(milli) => Some(milli_to_celsius(milli)),
        Err(e) => {
            log::debug!("Temperature unavailable: {}", e);
            None
        }
    }
}

/// Format a reading with exactly one decimal digit
pub fn format_reading(celsius: Option<f64>) -> String {
    match celsius {
        Some(c) => format!("{:.1} °C", c),
        None => UNAVAILABLE.to_string(),
    }
}

/// Full label text, e.g. "CPU Temp: 45.0 °C"
pub fn label_text(caption: &str, celsius: Option<f64>) -> String {
    format!("{}: {}", caption, format_reading(celsius))
}

/// Thermal zone data source
pub struct ThermalZoneSource {
    metadata: SourceMetadata,
    config: ThermalConfig,
    current: Option<f64>,

    /// Cached output values - updated in update(), returned by reference in values_ref()
    values: HashMap<String, Value>,
}

impl ThermalZoneSource {
    pub fn new(config: ThermalConfig) -> Self {
        let metadata = SourceMetadata {
            id: "thermal_zone".to_string(),
            name: "Thermal Zone".to_string(),
            description: "Kernel thermal zone temperature".to_string(),
            available_keys: vec![
                "caption".to_string(),
                "temperature".to_string(),
                "display".to_string(),
            ],
            default_interval: Duration::from_millis(config.update_interval_ms),
        };

        Self {
            metadata,
            config,
            current: None,
            values: HashMap::with_capacity(4),
        }
    }

    pub fn config(&self) -> &ThermalConfig {
        &self.config
    }

    /// Last reading in degrees Celsius
    pub fn current(&self) -> Option<f64> {
        self.current
    }

    /// Label text for the last reading
    pub fn label(&self) -> String {
        label_text(&self.config.caption, self.current)
    }
}

impl Default for ThermalZoneSource {
    fn default() -> Self {
        Self::new(ThermalConfig::default())
    }
}

impl DataSource for ThermalZoneSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn update(&mut self) -> Result<()> {
        // An unreadable zone is a displayable state, not an error
        self.current = read_celsius(&self.config.temp_path);

        self.values.clear();
        self.values
            .insert("caption".to_string(), Value::from(self.config.caption.clone()));
        self.values.insert(
            "temperature".to_string(),
            self.current.map(Value::from).unwrap_or(Value::Null),
        );
        self.values
            .insert("display".to_string(), Value::from(format_reading(self.current)));
        Ok(())
    }

    fn get_values(&self) -> HashMap<String, Value> {
        self.values.clone()
    }

    fn values_ref(&self) -> Option<&HashMap<String, Value>> {
        Some(&self.values)
    }

    fn is_available(&self) -> bool {
        self.config.temp_path.exists()
    }
}
