//! Source configuration types for all data sources.

pub mod gpio;
pub mod logger;
pub mod network;
pub mod thermal;

// Re-export all source config types for convenience
pub use gpio::GpioConfig;
pub use logger::{LogLevel, SensorLoggerConfig};
pub use network::NetMonitorConfig;
pub use thermal::ThermalConfig;
