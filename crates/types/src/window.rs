//! Window configuration types.

use serde::{Deserialize, Serialize};

fn default_video_width() -> i32 {
    640
}

fn default_video_height() -> i32 {
    480
}

fn default_video_title() -> String {
    "Video Player".to_string()
}

/// Video player window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    #[serde(default = "default_video_width")]
    pub width: i32,
    #[serde(default = "default_video_height")]
    pub height: i32,
    #[serde(default = "default_video_title")]
    pub title: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: default_video_width(),
            height: default_video_height(),
            title: default_video_title(),
        }
    }
}
