//! Application-wide CSS

use gtk4::gdk::Display;
use gtk4::CssProvider;
use log::warn;

const APP_CSS: &str = "
.temp-readout {
    font-size: 24px;
}
";

/// Install the application stylesheet on the default display
pub fn load_css() {
    let Some(display) = Display::default() else {
        warn!("No display available, skipping stylesheet");
        return;
    };

    let provider = CssProvider::new();
    provider.load_from_data(APP_CSS);

    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
