//! Temperature dashboard window
//!
//! A single centered label refreshed from a thermal zone on a GLib timer.

use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Align, Application, ApplicationWindow, Box as GtkBox, Label, Orientation};
use log::{debug, info};
use pi_panels_core::DataSource;
use pi_panels_sources::ThermalZoneSource;
use pi_panels_types::ThermalConfig;
use std::time::Duration;

const WINDOW_TITLE: &str = "Temperature Dashboard";
const INITIAL_TEXT: &str = "Loading...";

pub fn build_window(app: &Application, config: &ThermalConfig) -> ApplicationWindow {
    let label = Label::new(Some(INITIAL_TEXT));
    label.set_halign(Align::Center);
    label.set_valign(Align::Center);
    label.set_hexpand(true);
    label.set_vexpand(true);
    label.set_justify(gtk4::Justification::Center);
    label.add_css_class("temp-readout");

    let layout = GtkBox::new(Orientation::Vertical, 0);
    layout.append(&label);

    let source = ThermalZoneSource::new(config.clone());
    let interval = Duration::from_millis(config.update_interval_ms.max(1));
    info!(
        "Polling {} every {:?}",
        config.temp_path.display(),
        interval
    );
    start_polling(&label, source, interval);

    ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(300)
        .default_height(100)
        .child(&layout)
        .build()
}

/// Refresh `label` from `source` every `interval`
///
/// The timer holds only a weak reference and stops once the label is gone.
fn start_polling(label: &Label, mut source: ThermalZoneSource, interval: Duration) -> glib::SourceId {
    let label_weak = label.downgrade();
    glib::timeout_add_local(interval, move || {
        let Some(label) = label_weak.upgrade() else {
            return glib::ControlFlow::Break;
        };

        if let Err(e) = source.update() {
            debug!("Thermal update failed: {}", e);
        }
        label.set_text(&source.label());
        glib::ControlFlow::Continue
    })
}
