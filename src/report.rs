//! Text reports printed by the terminal monitors

use pi_panels_sources::{format_bytes, InterfaceStats};
use pi_panels_types::EnvReading;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

/// Local time in the report header format
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Network statistics block for one tick
///
/// An empty slice renders as a single error line.
pub fn network_report(timestamp: &str, stats: &[InterfaceStats]) -> String {
    if stats.is_empty() {
        return format!("[{}] Error: No network data available.\n", timestamp);
    }

    let mut out = String::new();
    let _ = writeln!(out, "[{}] Network Statistics:", timestamp);
    for iface in stats {
        let _ = writeln!(out, "  Interface: {}", iface.name);
        let _ = writeln!(out, "    Bytes Sent: {}", format_bytes(iface.bytes_sent));
        let _ = writeln!(out, "    Bytes Received: {}", format_bytes(iface.bytes_received));
        let _ = writeln!(out, "    Packets Sent: {}", iface.packets_sent);
        let _ = writeln!(out, "    Packets Received: {}", iface.packets_received);
        let _ = writeln!(out, "    Errors In: {}", iface.errors_in);
        let _ = writeln!(out, "    Errors Out: {}", iface.errors_out);
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    out
}

/// Shortest decimal form that still shows a fractional part ("55.0", "21.46")
fn decimal(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// Log message for one simulated sensor sample
pub fn sensor_line(reading: &EnvReading) -> String {
    format!(
        "Sensor Data - Temp: {}°C, Humidity: {}%, Pressure: {}hPa",
        decimal(reading.temperature),
        decimal(reading.humidity),
        decimal(reading.pressure)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_report() {
        let stats = vec![InterfaceStats {
            name: "eth0".to_string(),
            bytes_sent: 2048,
            bytes_received: 100,
            packets_sent: 3,
            packets_received: 4,
            errors_in: 0,
            errors_out: 1,
        }];

        let report = network_report("2026-10-19 08:00:00", &stats);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "[2026-10-19 08:00:00] Network Statistics:");
        assert_eq!(lines[1], "  Interface: eth0");
        assert_eq!(lines[2], "    Bytes Sent: 2.00 KB");
        assert_eq!(lines[3], "    Bytes Received: 100.00 B");
        assert_eq!(lines[7], "    Errors Out: 1");
        assert_eq!(lines[8], "-".repeat(50));
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_empty_network_report() {
        assert_eq!(
            network_report("2026-10-19 08:00:00", &[]),
            "[2026-10-19 08:00:00] Error: No network data available.\n"
        );
    }

    #[test]
    fn test_sensor_line() {
        let reading = EnvReading {
            temperature: 21.46,
            humidity: 55.0,
            pressure: 1013.25,
        };
        assert_eq!(
            sensor_line(&reading),
            "Sensor Data - Temp: 21.46°C, Humidity: 55.0%, Pressure: 1013.25hPa"
        );
    }
}
