//! Basic video player window
//!
//! A `gtk4::Video` area above an "Open Video" button. Decoding and
//! rendering are left entirely to GTK's media backend.

use gtk4::gio;
use gtk4::prelude::*;
use gtk4::{
    Application, ApplicationWindow, Box as GtkBox, Button, FileDialog, FileFilter, MediaFile,
    Orientation, Video, Window,
};
use pi_panels_core::{play_selection, MediaSink};
use pi_panels_types::VideoConfig;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// `MediaSink` backed by a GTK video widget
struct VideoSink {
    video: Video,
}

impl MediaSink for VideoSink {
    fn load(&mut self, path: &Path) {
        let media = MediaFile::for_filename(path);
        self.video.set_media_stream(Some(&media));
    }

    fn play(&mut self) {
        if let Some(stream) = self.video.media_stream() {
            stream.play();
        }
    }
}

pub fn build_window(app: &Application, config: &VideoConfig) -> ApplicationWindow {
    let video = Video::new();
    video.set_vexpand(true);
    video.set_hexpand(true);

    let open_button = Button::with_label("Open Video");

    let layout = GtkBox::new(Orientation::Vertical, 0);
    layout.append(&video);
    layout.append(&open_button);

    let sink = Rc::new(RefCell::new(VideoSink { video }));
    open_button.connect_clicked(move |btn| {
        let parent = btn.root().and_downcast::<Window>();
        let sink = sink.clone();
        open_dialog().open(parent.as_ref(), gio::Cancellable::NONE, move |result| {
            // Cancelling the dialog comes back as an error
            let selection = result.ok().and_then(|file| file.path());
            play_selection(&mut *sink.borrow_mut(), selection);
        });
    });

    ApplicationWindow::builder()
        .application(app)
        .title(config.title.as_str())
        .default_width(config.width)
        .default_height(config.height)
        .child(&layout)
        .build()
}

fn open_dialog() -> FileDialog {
    let video_filter = FileFilter::new();
    video_filter.set_name(Some("Video Files"));
    video_filter.add_mime_type("video/*");

    let all_filter = FileFilter::new();
    all_filter.set_name(Some("All Files"));
    all_filter.add_pattern("*");

    let filters = gio::ListStore::new::<FileFilter>();
    filters.append(&all_filter);
    filters.append(&video_filter);

    FileDialog::builder()
        .title("Open Video")
        .modal(true)
        .filters(&filters)
        .default_filter(&all_filter)
        .build()
}
