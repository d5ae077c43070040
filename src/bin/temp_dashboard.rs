use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use log::warn;
use pi_panels::cli::CommonArgs;
use pi_panels::ui::{style, temp_dashboard};
use pi_panels::{logging, AppConfig};
use std::path::PathBuf;

const APP_ID: &str = "com.github.pi_panels.temp_dashboard";

/// Show the CPU temperature from a kernel thermal zone
#[derive(Parser, Debug)]
#[command(name = "temp-dashboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Thermal zone file to read (overrides the config file)
    #[arg(short = 'z', long = "zone", value_name = "FILE")]
    zone: Option<PathBuf>,

    /// Refresh interval in milliseconds (overrides the config file)
    #[arg(short = 'i', long = "interval-ms", value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: Option<u64>,
}

fn main() -> gtk4::glib::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.debug);

    warn!("Starting temp-dashboard v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load_or_default(cli.common.config.as_deref()).thermal;
    if let Some(zone) = cli.zone {
        config.temp_path = zone;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.update_interval_ms = interval_ms;
    }

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| {
        style::load_css();
        temp_dashboard::build_window(app, &config).present();
    });

    app.run_with_args(&["temp-dashboard"])
}
