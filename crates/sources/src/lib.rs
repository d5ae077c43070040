//! pi-panels-sources: Data source implementations for pi-panels.

mod gpio;
mod network;
mod simulated;
mod thermal;

pub use gpio::SysfsGpio;
pub use network::{format_bytes, select_interfaces, InterfaceStats, NetworkSource};
pub use simulated::SimulatedEnvSource;
pub use thermal::{
    format_reading, label_text, milli_to_celsius, read_celsius, read_milli_celsius,
    ThermalZoneSource,
};
