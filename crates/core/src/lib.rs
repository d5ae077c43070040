//! pi-panels-core: Core traits and shared constants for pi-panels.
//!
//! This crate contains the seams the programs are built around: the
//! `DataSource` polling trait, the `SysfsWriter` used for kernel control
//! files, the `MediaSink` used by the video player, and the shared
//! `SourceError` type.

pub mod constants;
mod data_source;
mod error;
mod playback;
mod sysfs;

pub use constants::{BYTES_PER_KB, DEFAULT_POLL_INTERVAL};
pub use data_source::{DataSource, SourceMetadata};
pub use error::SourceError;
pub use playback::{play_selection, MediaSink};
pub use sysfs::{FsWriter, SysfsWriter};
