//! Network monitor configuration types.

use crate::validation::MAX_PERIOD_SECS;
use crate::ValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_interval() -> f64 {
    2.0
}

/// Network monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetMonitorConfig {
    /// Interface to report (None = all interfaces)
    #[serde(default)]
    pub interface: Option<String>,
    #[serde(default = "default_interval")]
    pub interval_secs: f64,
    /// Stop after this many seconds (None = run until interrupted)
    #[serde(default)]
    pub duration_secs: Option<f64>,
}

impl NetMonitorConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        seconds_to_duration(self.interval_secs, "Interval")
            .map_err(|e| e.unwrap_or(ValidationError::NonPositiveInterval))?;
        if let Some(duration) = self.duration_secs {
            seconds_to_duration(duration, "Duration")
                .map_err(|e| e.unwrap_or(ValidationError::NonPositiveDuration))?;
        }
        Ok(())
    }

    /// Tick period; only meaningful after `validate()` succeeded
    pub fn period(&self) -> Duration {
        Duration::try_from_secs_f64(self.interval_secs).unwrap_or_default()
    }

    /// Run limit; only meaningful after `validate()` succeeded
    pub fn limit(&self) -> Option<Duration> {
        self.duration_secs
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// Convert user seconds to a Duration
///
/// `Err(None)` means not a positive number; `Err(Some(_))` means too large.
fn seconds_to_duration(secs: f64, what: &'static str) -> Result<Duration, Option<ValidationError>> {
    if secs.is_nan() || secs <= 0.0 {
        return Err(None);
    }
    if secs > MAX_PERIOD_SECS as f64 {
        return Err(Some(ValidationError::TooLarge(what)));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| Some(ValidationError::TooLarge(what)))
}

impl Default for NetMonitorConfig {
    fn default() -> Self {
        Self {
            interface: None,
            interval_secs: default_interval(),
            duration_secs: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(NetMonitorConfig::default().validate().is_ok());

        let config = NetMonitorConfig {
            interval_secs: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositiveInterval));

        let config = NetMonitorConfig {
            duration_secs: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NonPositiveDuration));

        let config = NetMonitorConfig {
            interval_secs: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooLarge("Interval")));
    }

    #[test]
    fn test_huge_values_are_rejected_not_converted() {
        let config = NetMonitorConfig {
            interval_secs: 1e20,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooLarge("Interval")));

        let config = NetMonitorConfig {
            duration_secs: Some(1e20),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::TooLarge("Duration")));
    }

    #[test]
    fn test_period_and_limit() {
        let config = NetMonitorConfig {
            interval_secs: 0.5,
            duration_secs: Some(3.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.period(), Duration::from_millis(500));
        assert_eq!(config.limit(), Some(Duration::from_secs(3)));
    }
}
