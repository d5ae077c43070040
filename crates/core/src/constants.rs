//! Shared constants.

use std::time::Duration;

/// Poll interval used when a source has no configured interval
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

pub const BYTES_PER_KB: f64 = 1024.0;
