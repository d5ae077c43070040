//! Sensor logger configuration types.

use crate::validation::MAX_PERIOD_SECS;
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Level names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "DEBUG")]
    Debug,
    #[serde(rename = "INFO")]
    #[default]
    Info,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "ERROR")]
    Error,
}

impl LogLevel {
    pub const NAMES: [&'static str; 4] = ["DEBUG", "INFO", "WARNING", "ERROR"];

    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            other => Err(format!(
                "invalid log level '{}' (expected one of {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("sensor_data.log")
}

fn default_interval() -> i64 {
    5
}

/// Periodic sensor logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorLoggerConfig {
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_interval")]
    pub interval_secs: i64,
    #[serde(default)]
    pub duration_secs: Option<i64>,
    #[serde(default)]
    pub log_level: LogLevel,
    /// Append to an existing log file instead of refusing to start
    #[serde(default)]
    pub append: bool,
}

impl SensorLoggerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_secs <= 0 {
            return Err(ValidationError::NonPositiveInterval);
        }
        if self.interval_secs.unsigned_abs() > MAX_PERIOD_SECS {
            return Err(ValidationError::TooLarge("Interval"));
        }
        if let Some(duration) = self.duration_secs {
            if duration <= 0 {
                return Err(ValidationError::NonPositiveDuration);
            }
            if duration.unsigned_abs() > MAX_PERIOD_SECS {
                return Err(ValidationError::TooLarge("Duration"));
            }
        }
        if self.log_file.exists() && !self.append {
            return Err(ValidationError::LogFileExists(self.log_file.clone()));
        }
        Ok(())
    }

    /// Tick period; only meaningful after `validate()` succeeded
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.interval_secs.unsigned_abs())
    }

    /// Run limit; only meaningful after `validate()` succeeded
    pub fn limit(&self) -> Option<Duration> {
        self.duration_secs
            .map(|secs| Duration::from_secs(secs.unsigned_abs()))
    }
}

impl Default for SensorLoggerConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            interval_secs: default_interval(),
            duration_secs: None,
            log_level: LogLevel::default(),
            append: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!("DEBUG".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("verbose".parse::<LogLevel>().is_err());
        assert_eq!(LogLevel::Warning.to_level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_validate_intervals() {
        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositiveInterval));

        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            duration_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositiveDuration));

        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            interval_secs: -1,
            duration_secs: Some(-5),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositiveInterval));
    }

    #[test]
    fn test_validate_rejects_overflowing_periods() {
        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            interval_secs: i64::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooLarge("Interval")));

        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            duration_secs: Some(i64::MAX),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooLarge("Duration")));

        let config = SensorLoggerConfig {
            log_file: PathBuf::from("/nonexistent/pi-panels/sensor.log"),
            interval_secs: 2,
            duration_secs: Some(10),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.period(), Duration::from_secs(2));
        assert_eq!(config.limit(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_existing_log_file_requires_append() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let mut config = SensorLoggerConfig {
            log_file: manifest.clone(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::LogFileExists(manifest))
        );

        config.append = true;
        assert!(config.validate().is_ok());
    }
}
