//! Logger setup
//!
//! GUI programs log to stderr through `env_logger` with a verbosity picked
//! by `-d`. The sensor logger additionally mirrors every record into a file.

use anyhow::{Context, Result};
use log::{Level, LevelFilter};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Map the `-d` level to a default filter
///
/// Level 0 (default): warn only
/// Level 1: info
/// Level 2: debug
/// Level 3+: trace
pub fn filter_for_debug_level(debug: u8) -> &'static str {
    match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the stderr logger; RUST_LOG overrides the CLI setting
pub fn init(debug: u8) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter_for_debug_level(debug)),
    )
    .init();
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// One log line, e.g. `2026-01-02 03:04:05 - INFO - message`
pub fn format_line(timestamp: &str, level: Level, message: &std::fmt::Arguments<'_>) -> String {
    format!("{} - {} - {}", timestamp, level_name(level), message)
}

/// Writes everything to both a file and stderr
pub struct TeeWriter {
    file: File,
}

impl TeeWriter {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        // Console output is best effort; the file is the record
        let _ = io::stderr().write_all(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

/// Open the log file for the sensor logger
pub fn open_log_file(path: &Path, append: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    options
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Initialize a logger that writes timestamped lines to `path` and stderr
pub fn init_with_file(path: &Path, level: LevelFilter, append: bool) -> Result<()> {
    let file = open_log_file(path, append)?;

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            writeln!(buf, "{}", format_line(&timestamp, record.level(), record.args()))
        })
        .target(env_logger::Target::Pipe(Box::new(TeeWriter::new(file))))
        .try_init()
        .context("Logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_level_mapping() {
        assert_eq!(filter_for_debug_level(0), "warn");
        assert_eq!(filter_for_debug_level(1), "info");
        assert_eq!(filter_for_debug_level(2), "debug");
        assert_eq!(filter_for_debug_level(9), "trace");
    }

    #[test]
    fn test_format_line() {
        let line = format_line(
            "2026-10-19 08:00:00",
            Level::Warn,
            &format_args!("Sensor Data - Temp: {}", 21.5),
        );
        assert_eq!(line, "2026-10-19 08:00:00 - WARNING - Sensor Data - Temp: 21.5");
    }

    #[test]
    fn test_tee_writer_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensor_data.log");

        {
            let mut tee = TeeWriter::new(open_log_file(&path, false).unwrap());
            tee.write_all(b"first\n").unwrap();
            tee.flush().unwrap();
        }
        {
            let mut tee = TeeWriter::new(open_log_file(&path, true).unwrap());
            tee.write_all(b"second\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");

        {
            let mut tee = TeeWriter::new(open_log_file(&path, false).unwrap());
            tee.write_all(b"fresh\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
