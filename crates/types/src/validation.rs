//! Validation errors for user supplied settings.

use std::path::PathBuf;
use thiserror::Error;

/// Longest interval or duration accepted, in seconds (100 years)
///
/// Anything longer overflows deadline arithmetic on the runtime's clock.
pub const MAX_PERIOD_SECS: u64 = 100 * 365 * 24 * 60 * 60;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Interval must be a positive number.")]
    NonPositiveInterval,
    #[error("Duration must be a positive number.")]
    NonPositiveDuration,
    #[error("{0} is too large (at most {max} seconds).", max = MAX_PERIOD_SECS)]
    TooLarge(&'static str),
    #[error("Log file '{}' already exists. Use --append to append or choose a different file.", .0.display())]
    LogFileExists(PathBuf),
}
