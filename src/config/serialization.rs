//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let fallback_command = match &self.clipboard.fallback_command {
            Some(command) => format!("fallback_command = {:?}", command),
            None => "# fallback_command = \"xclip -selection clipboard\"".to_string(),
        };

        format!(
            r#"# handle-scout configuration

# Lookup service base URL (HANDLE_SCOUT_API_URL overrides)
api_url = {api_url:?}

# Where exported JSON files are written (HANDLE_SCOUT_DOWNLOAD_DIR overrides)
download_dir = {download_dir:?}

# Theme: dark, light
theme = {theme:?}

[clipboard]
# Use the system clipboard in a local display session
prefer_system = {prefer_system}
# Copy command used otherwise (auto-detected when unset)
{fallback_command}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level:?}
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir:?}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix:?}
"#,
            api_url = self.api_url,
            download_dir = self.download_dir.display().to_string(),
            theme = self.theme,
            prefer_system = self.clipboard.prefer_system,
            fallback_command = fallback_command,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display().to_string(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
