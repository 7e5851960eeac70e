//! Clipboard configuration

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone)]
pub struct ClipboardConfig {
    /// Use the system clipboard when running in a local display session
    pub prefer_system: bool,
    /// Copy command used when the system clipboard is unavailable.
    /// `None` auto-detects wl-copy, xclip, xsel, pbcopy or clip.
    pub fallback_command: Option<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            prefer_system: true,
            fallback_command: None,
        }
    }
}

/// Clipboard settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileClipboard {
    pub prefer_system: Option<bool>,
    pub fallback_command: Option<String>,
}

impl ClipboardConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileClipboard>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            prefer_system: file.prefer_system.unwrap_or(defaults.prefer_system),
            fallback_command: file
                .fallback_command
                .filter(|c| !c.trim().is_empty())
                .or(defaults.fallback_command),
        }
    }
}
