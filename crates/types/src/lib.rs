//! pi-panels-types: Shared data types for pi-panels.
//!
//! This crate contains pure data types (configs, enums, readings) that are
//! shared across all pi-panels crates. These types have no GTK dependency,
//! making them suitable as a foundation layer.

pub mod gpio;
pub mod reading;
pub mod source_configs;
pub mod validation;
pub mod window;

// Re-export commonly used types at the crate root for convenience
pub use gpio::{PinDirection, PinLevel};
pub use reading::EnvReading;
pub use source_configs::{
    GpioConfig, LogLevel, NetMonitorConfig, SensorLoggerConfig, ThermalConfig,
};
pub use validation::{ValidationError, MAX_PERIOD_SECS};
pub use window::VideoConfig;
