use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::Result;

const MIN_WINDOW_WIDTH: i32 = 320;
const MIN_WINDOW_HEIGHT: i32 = 240;

/// Startup configuration. Read once at launch and never written back:
/// theme changes made in the editor last only for the session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EditorSettings {
    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    /// Directory the first open/save dialog starts in.
    #[serde(default)]
    pub start_directory: Option<String>,
}

fn default_window_width() -> i32 {
    640
}

fn default_window_height() -> i32 {
    480
}

fn default_word_wrap() -> bool {
    true
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            word_wrap_enabled: default_word_wrap(),
            start_directory: None,
        }
    }
}

impl EditorSettings {
    /// Load settings from the config directory, falling back to defaults
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Self::default();
        }

        match Self::load_from(&config_path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to read settings from {}: {}. Using defaults.", config_path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse a settings file, clamping the window to a usable size
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&contents)?;
        settings.window_width = settings.window_width.max(MIN_WINDOW_WIDTH);
        settings.window_height = settings.window_height.max(MIN_WINDOW_HEIGHT);
        Ok(settings)
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("inkpad");
        path.push("settings.json");
        path
    }
}
