//! Configuration tests

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap()
}

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), no_env);
    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.download_dir, config.download_dir);
    assert_eq!(reloaded.logging.file_rotation, config.logging.file_rotation);
    assert_eq!(reloaded.clipboard.fallback_command, None);
}

#[test]
fn test_config_roundtrip_with_fallback_command() {
    let mut config = Config::default();
    config.clipboard.fallback_command = Some("xclip -selection clipboard".to_string());
    config.clipboard.prefer_system = false;
    config.logging.file_rotation = LogRotation::Hourly;

    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(
        reloaded.clipboard.fallback_command.as_deref(),
        Some("xclip -selection clipboard")
    );
    assert!(!reloaded.clipboard.prefer_system);
    assert_eq!(reloaded.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = Config::from_sources(parse(""), no_env);

    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.download_dir, PathBuf::from("."));
    assert_eq!(config.theme, "dark");
    assert!(config.clipboard.prefer_system);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
api_url = "https://scout.example.com"
download_dir = "/tmp/exports"

[clipboard]
fallback_command = "   "

[logging]
level = "debug"
file_rotation = "NEVER"
"#,
    );

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.api_url, "https://scout.example.com");
    assert_eq!(config.download_dir, PathBuf::from("/tmp/exports"));
    assert_eq!(config.clipboard.fallback_command, None);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_env_overrides_file() {
    let env: HashMap<&str, &str> = [
        ("HANDLE_SCOUT_API_URL", "http://localhost:9999"),
        ("HANDLE_SCOUT_THEME", "light"),
    ]
    .into_iter()
    .collect();
    let file = parse(r#"api_url = "https://scout.example.com""#);

    let config = Config::from_sources(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.api_url, "http://localhost:9999");
    assert_eq!(config.theme, "light");
}

#[test]
fn test_rotation_parsing() {
    assert_eq!("Hourly".parse::<LogRotation>(), Ok(LogRotation::Hourly));
    assert!("weekly".parse::<LogRotation>().is_err());
}

#[test]
fn test_bad_logging_values_keep_defaults() {
    let file = parse(
        r#"
[logging]
level = "LOUD"
file_rotation = "weekly"
file_prefix = ""
"#,
    );

    let config = Config::from_sources(file, no_env);

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.logging.file_prefix, "handle-scout");
}

#[test]
fn test_logging_level_is_normalized() {
    let config = Config::from_sources(parse("[logging]\nlevel = \"DEBUG\""), no_env);
    assert_eq!(config.logging.level, "debug");
}
