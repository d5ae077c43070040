//! Reading types produced by data sources.

use serde::{Deserialize, Serialize};

/// One environmental sample (temperature, humidity, pressure)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct EnvReading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Hectopascal
    pub pressure: f64,
}

impl EnvReading {
    /// Round every component to two decimal places
    pub fn rounded(self) -> Self {
        Self {
            temperature: round2(self.temperature),
            humidity: round2(self.humidity),
            pressure: round2(self.pressure),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded() {
        let r = EnvReading {
            temperature: 21.456,
            humidity: 55.001,
            pressure: 1013.255_1,
        }
        .rounded();
        assert_eq!(r.temperature, 21.46);
        assert_eq!(r.humidity, 55.0);
        assert_eq!(r.pressure, 1013.26);
    }
}
