use clap::Parser;
use log::{error, info};
use pi_panels::report::sensor_line;
use pi_panels::{logging, run_periodic, StopReason};
use pi_panels_core::DataSource;
use pi_panels_sources::SimulatedEnvSource;
use pi_panels_types::{LogLevel, SensorLoggerConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log simulated sensor data to a file at a fixed interval
#[derive(Parser, Debug)]
#[command(name = "sensor-logger")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the log file
    #[arg(long = "log-file", value_name = "FILE", default_value = "sensor_data.log")]
    log_file: PathBuf,

    /// Interval between sensor readings in seconds
    #[arg(long = "interval", value_name = "SECS", default_value_t = 5, allow_negative_numbers = true)]
    interval: i64,

    /// Duration to log data in seconds (default: run until stopped)
    #[arg(long = "duration", value_name = "SECS", allow_negative_numbers = true)]
    duration: Option<i64>,

    /// Logging level
    /// (DEBUG, INFO, WARNING, ERROR)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "INFO")]
    log_level: LogLevel,

    /// Append to an existing log file instead of refusing to start
    #[arg(long = "append")]
    append: bool,
}

impl Cli {
    fn logger_config(self) -> SensorLoggerConfig {
        SensorLoggerConfig {
            log_file: self.log_file,
            interval_secs: self.interval,
            duration_secs: self.duration,
            log_level: self.log_level,
            append: self.append,
        }
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().logger_config();

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: SensorLoggerConfig) -> anyhow::Result<()> {
    config.validate()?;
    logging::init_with_file(
        &config.log_file,
        config.log_level.to_level_filter(),
        config.append,
    )?;

    info!("Starting sensor data logging...");

    let rt = tokio::runtime::Runtime::new()?;
    let period = config.period();
    let limit = config.limit();
    let mut source = SimulatedEnvSource::new();

    let reason = rt.block_on(run_periodic(period, limit, || match source.update() {
        Ok(()) => {
            if let Some(reading) = source.reading() {
                info!("{}", sensor_line(&reading));
            }
        }
        Err(e) => error!("An error occurred: {}", e),
    }));

    match reason {
        StopReason::DurationReached => info!("Logging duration reached. Stopping."),
        StopReason::Interrupted => info!("Logging stopped by user."),
    }
    log::logger().flush();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(args: &[&str]) -> Option<String> {
        let mut args = args.to_vec();
        args.extend(["--log-file", "/nonexistent/pi-panels/sensor_data.log"]);
        let cli = Cli::try_parse_from(args).unwrap();
        cli.logger_config().validate().err().map(|e| e.to_string())
    }

    #[test]
    fn test_negative_values_reach_validation() {
        assert_eq!(
            validation_message(&["sensor-logger", "--interval", "-1"]).as_deref(),
            Some("Interval must be a positive number.")
        );
        assert_eq!(
            validation_message(&["sensor-logger", "--duration", "-5"]).as_deref(),
            Some("Duration must be a positive number.")
        );
    }

    #[test]
    fn test_huge_interval_is_a_validation_error() {
        let message =
            validation_message(&["sensor-logger", "--interval", "9223372036854775807"]).unwrap();
        assert!(message.starts_with("Interval is too large"), "{}", message);
    }

    #[test]
    fn test_log_level_choice() {
        let cli = Cli::try_parse_from(["sensor-logger", "--log-level", "WARNING"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert!(Cli::try_parse_from(["sensor-logger", "--log-level", "LOUD"]).is_err());
    }
}
