//! Legacy sysfs GPIO output control
//!
//! Drives a single pin through `/sys/class/gpio`: export it, switch it to
//! output, then write levels. Nothing is read back.

use log::{debug, info, warn};
use pi_panels_core::{FsWriter, SourceError, SysfsWriter};
use pi_panels_types::{GpioConfig, PinDirection, PinLevel};
use std::path::Path;

/// A single GPIO pin controlled through sysfs
pub struct SysfsGpio<W: SysfsWriter = FsWriter> {
    config: GpioConfig,
    writer: W,
}

impl SysfsGpio<FsWriter> {
    pub fn new(config: GpioConfig) -> Self {
        Self::with_writer(config, FsWriter)
    }
}

impl<W: SysfsWriter> SysfsGpio<W> {
    pub fn with_writer(config: GpioConfig, writer: W) -> Self {
        Self { config, writer }
    }

    pub fn config(&self) -> &GpioConfig {
        &self.config
    }

    pub fn pin(&self) -> u32 {
        self.config.pin
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), SourceError> {
        self.writer
            .write(path, contents)
            .map_err(|e| SourceError::io(path, e))
    }

    /// Ask the kernel to expose the pin under `gpio<N>/`
    pub fn export(&self) -> Result<(), SourceError> {
        self.write(&self.config.export_path(), &self.config.pin.to_string())
    }

    pub fn set_direction(&self, direction: PinDirection) -> Result<(), SourceError> {
        self.write(&self.config.direction_path(), direction.as_sysfs())
    }

    pub fn write_level(&self, level: PinLevel) -> Result<(), SourceError> {
        self.write(&self.config.value_path(), level.as_sysfs())
    }

    /// Export the pin and make it an output
    ///
    /// Both writes are attempted even if the first one fails: a pin that was
    /// exported by a previous run rejects the export but still accepts the
    /// direction write. Failures are logged and otherwise ignored.
    pub fn init_output(&self) {
        match self.export() {
            Ok(()) => info!("Exported GPIO{}", self.config.pin),
            Err(e) => warn!("GPIO{} export skipped: {}", self.config.pin, e),
        }
        match self.set_direction(PinDirection::Out) {
            Ok(()) => info!("GPIO{} direction set to out", self.config.pin),
            Err(e) => warn!("GPIO{} direction skipped: {}", self.config.pin, e),
        }
    }

    /// Write a level, ignoring failure
    ///
    /// Returns whether the write went through.
    pub fn set_level_best_effort(&self, level: PinLevel) -> bool {
        match self.write_level(level) {
            Ok(()) => {
                debug!("GPIO{} <- {}", self.config.pin, level);
                true
            }
            Err(e) => {
                debug!("GPIO{} write of {} skipped: {}", self.config.pin, level, e);
                false
            }
        }
    }
}
