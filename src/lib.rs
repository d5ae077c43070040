//! pi-panels: small GTK4 panels and terminal monitors for Linux boards
//!
//! This library holds the pieces shared by the binaries:
//! - GTK4 windows for GPIO control, thermal readout and video playback
//! - Configuration management
//! - Logger setup and command line options
//! - The periodic loop and report formatting used by the terminal monitors

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use config::AppConfig;
pub use runner::{run_periodic, StopReason};
