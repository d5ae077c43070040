//! GPIO LED toggle window

use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Box as GtkBox, Button, Orientation};
use pi_panels_core::SysfsWriter;
use pi_panels_sources::SysfsGpio;
use pi_panels_types::PinLevel;
use std::rc::Rc;

const WINDOW_TITLE: &str = "GPIO LED Toggle";

/// Build the two-button window driving `gpio`
///
/// The pin is expected to be exported and set to output already.
pub fn build_window<W>(app: &Application, gpio: Rc<SysfsGpio<W>>) -> ApplicationWindow
where
    W: SysfsWriter + 'static,
{
    let on_button = Button::with_label("LED ON");
    let off_button = Button::with_label("LED OFF");

    connect_level(&on_button, gpio.clone(), PinLevel::High);
    connect_level(&off_button, gpio, PinLevel::Low);

    let layout = GtkBox::new(Orientation::Vertical, 6);
    layout.set_margin_top(6);
    layout.set_margin_bottom(6);
    layout.set_margin_start(6);
    layout.set_margin_end(6);
    layout.append(&on_button);
    layout.append(&off_button);

    ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .child(&layout)
        .build()
}

fn connect_level<W>(button: &Button, gpio: Rc<SysfsGpio<W>>, level: PinLevel)
where
    W: SysfsWriter + 'static,
{
    button.connect_clicked(move |_| {
        gpio.set_level_best_effort(level);
    });
}
