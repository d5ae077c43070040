//! Handing a selected file to a media player.

use std::path::{Path, PathBuf};

/// Something that can load and play a local media file
pub trait MediaSink {
    fn load(&mut self, path: &Path);
    fn play(&mut self);
}

/// Load and start the selected file, if any
///
/// A cancelled dialog (`None`) or an empty path leaves the sink untouched.
/// Returns whether playback was started.
pub fn play_selection<S: MediaSink + ?Sized>(sink: &mut S, selection: Option<PathBuf>) -> bool {
    match selection {
        Some(path) if !path.as_os_str().is_empty() => {
            log::info!("Playing {}", path.display());
            sink.load(&path);
            sink.play();
            true
        }
        _ => {
            log::debug!("No file selected, playback unchanged");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl MediaSink for Recorder {
        fn load(&mut self, path: &Path) {
            self.calls.push(format!("load {}", path.display()));
        }

        fn play(&mut self) {
            self.calls.push("play".to_string());
        }
    }

    #[test]
    fn test_selection_loads_then_plays() {
        let mut sink = Recorder::default();
        assert!(play_selection(&mut sink, Some(PathBuf::from("/videos/clip.mp4"))));
        assert_eq!(sink.calls, vec!["load /videos/clip.mp4", "play"]);
    }

    #[test]
    fn test_cancelled_dialog_leaves_sink_untouched() {
        let mut sink = Recorder::default();
        assert!(!play_selection(&mut sink, None));
        assert!(!play_selection(&mut sink, Some(PathBuf::new())));
        assert!(sink.calls.is_empty());
    }
}
