use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use log::{info, warn};
use pi_panels::cli::CommonArgs;
use pi_panels::ui::gpio_panel;
use pi_panels::{logging, AppConfig};
use pi_panels_sources::SysfsGpio;
use std::rc::Rc;

const APP_ID: &str = "com.github.pi_panels.gpio_toggle";

/// Toggle an LED on a sysfs GPIO pin
#[derive(Parser, Debug)]
#[command(name = "gpio-toggle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// GPIO number to drive (overrides the config file)
    #[arg(short = 'p', long = "pin", value_name = "N")]
    pin: Option<u32>,
}

fn main() -> gtk4::glib::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.debug);

    warn!("Starting gpio-toggle v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load_or_default(cli.common.config.as_deref()).gpio;
    if let Some(pin) = cli.pin {
        config.pin = pin;
    }
    info!("Using GPIO{} under {}", config.pin, config.sysfs_root.display());

    let gpio = Rc::new(SysfsGpio::new(config));
    gpio.init_output();

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| {
        gpio_panel::build_window(app, gpio.clone()).present();
    });

    // Pass only the program name; arguments were already parsed by clap
    app.run_with_args(&["gpio-toggle"])
}
