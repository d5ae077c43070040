//! GTK4 windows

pub mod gpio_panel;
pub mod style;
pub mod temp_dashboard;
pub mod video_player;
