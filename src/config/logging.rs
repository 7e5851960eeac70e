//! `[logging]` section

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Levels accepted by `level`; anything else falls back to the default
const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, never rolled
    Never,
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown file_rotation {:?}", other)),
        }
    }
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter level for this crate when RUST_LOG is unset
    pub level: String,
    /// Also write JSON lines to `file_dir` (off by default)
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::default(),
            file_prefix: "handle-scout".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Merge the file section over defaults. Unknown level or rotation
    /// values keep the default and print a warning; logging is not up yet.
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let mut config = Self::default();

        if let Some(level) = file.level {
            let level = level.trim().to_ascii_lowercase();
            if LEVELS.contains(&level.as_str()) {
                config.level = level;
            } else {
                eprintln!(
                    "Warning: unknown logging level {:?}, using {:?}",
                    level, config.level
                );
            }
        }

        if let Some(rotation) = file.file_rotation {
            match rotation.parse() {
                Ok(rotation) => config.file_rotation = rotation,
                Err(e) => eprintln!("Warning: {}, using {:?}", e, config.file_rotation.as_str()),
            }
        }

        if let Some(enabled) = file.file_enabled {
            config.file_enabled = enabled;
        }
        if let Some(dir) = file.file_dir {
            config.file_dir = PathBuf::from(dir);
        }
        if let Some(prefix) = file.file_prefix.filter(|p| !p.trim().is_empty()) {
            config.file_prefix = prefix;
        }

        config
    }
}
