//! GPIO pin state as it is spelled in the sysfs interface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logic level written to `gpio<N>/value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinLevel {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "low")]
    Low,
}

impl PinLevel {
    /// Text accepted by the kernel for this level
    pub fn as_sysfs(self) -> &'static str {
        match self {
            PinLevel::High => "1",
            PinLevel::Low => "0",
        }
    }
}

impl From<bool> for PinLevel {
    fn from(on: bool) -> Self {
        if on {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl fmt::Display for PinLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sysfs())
    }
}

/// Pin direction written to `gpio<N>/direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PinDirection {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "out")]
    #[default]
    Out,
}

impl PinDirection {
    pub fn as_sysfs(self) -> &'static str {
        match self {
            PinDirection::In => "in",
            PinDirection::Out => "out",
        }
    }
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sysfs())
    }
}
