use clap::Parser;
use log::{debug, error};
use pi_panels::cli::CommonArgs;
use pi_panels::report::{network_report, timestamp_now};
use pi_panels::{logging, run_periodic, StopReason};
use pi_panels_core::DataSource;
use pi_panels_sources::NetworkSource;
use pi_panels_types::NetMonitorConfig;
use std::process::ExitCode;

/// Print network interface statistics at a fixed interval
#[derive(Parser, Debug)]
#[command(name = "net-monitor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Network interface to monitor (e.g. eth0, wlan0; default: all interfaces)
    #[arg(long = "interface", value_name = "NAME")]
    interface: Option<String>,

    /// Interval between updates in seconds
    #[arg(long = "interval", value_name = "SECS", default_value = "2.0", allow_negative_numbers = true)]
    interval: f64,

    /// Duration to monitor in seconds (default: run until stopped)
    #[arg(long = "duration", value_name = "SECS", allow_negative_numbers = true)]
    duration: Option<f64>,
}

impl Cli {
    fn monitor_config(&self) -> NetMonitorConfig {
        NetMonitorConfig {
            interface: self.interface.clone(),
            interval_secs: self.interval,
            duration_secs: self.duration,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.debug);

    let config = cli.monitor_config();
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    debug!("Network monitor config: {:?}", config);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let period = config.period();
    let limit = config.limit();
    let mut source = NetworkSource::new(config);

    let reason = rt.block_on(run_periodic(period, limit, || {
        if let Err(e) = source.update() {
            eprintln!("Error retrieving network stats: {}", e);
        }
        print!("{}", network_report(&timestamp_now(), source.stats()));
    }));

    match reason {
        StopReason::DurationReached => println!("Monitoring duration reached. Stopping."),
        StopReason::Interrupted => println!("\nMonitoring stopped by user."),
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_message(args: &[&str]) -> Option<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        cli.monitor_config().validate().err().map(|e| e.to_string())
    }

    #[test]
    fn test_negative_values_reach_validation() {
        assert_eq!(
            validation_message(&["net-monitor", "--interval", "-1"]).as_deref(),
            Some("Interval must be a positive number.")
        );
        assert_eq!(
            validation_message(&["net-monitor", "--duration", "-5"]).as_deref(),
            Some("Duration must be a positive number.")
        );
    }

    #[test]
    fn test_huge_interval_is_a_validation_error() {
        let message = validation_message(&["net-monitor", "--interval", "1e20"]).unwrap();
        assert!(message.starts_with("Interval is too large"), "{}", message);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validation_message(&["net-monitor", "--interface", "eth0"]), None);
    }
}
