use clap::Parser;
use gtk4::prelude::*;
use gtk4::Application;
use log::warn;
use pi_panels::cli::CommonArgs;
use pi_panels::ui::video_player;
use pi_panels::{logging, AppConfig};

const APP_ID: &str = "com.github.pi_panels.video_player";

/// Play a local video file picked from a file dialog
#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> gtk4::glib::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.common.debug);

    warn!("Starting video-player v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(cli.common.config.as_deref()).video;

    let app = Application::builder().application_id(APP_ID).build();
    app.connect_activate(move |app| {
        video_player::build_window(app, &config).present();
    });

    app.run_with_args(&["video-player"])
}
