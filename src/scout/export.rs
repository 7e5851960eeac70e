//! JSON export of the last response
//!
//! The "download" of the terminal client: the raw response body is written
//! pretty-printed to `<dir>/handle-scout-<username>.json`.

use super::model::LookupResponse;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes exports into a fixed directory
#[derive(Debug, Clone)]
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the response and return the file path.
    ///
    /// The file is written in one call and its handle is closed before this
    /// returns.
    pub fn export_json(&self, response: &LookupResponse) -> Result<PathBuf, ExportError> {
        let text = response.to_pretty_json()?;
        let path = self.dir.join(file_name(&response.username));

        std::fs::write(&path, text).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Exported lookup for {} to {}", response.username, path.display());
        Ok(path)
    }
}

/// `handle-scout-<username>.json`, with path-unsafe characters replaced
pub fn file_name(username: &str) -> String {
    let safe: String = username
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("handle-scout-{}.json", safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn file_name_follows_pattern() {
        assert_eq!(file_name("john.doe"), "handle-scout-john.doe.json");
        assert_eq!(file_name("a/../b"), "handle-scout-a_.._b.json");
    }

    #[test]
    fn export_round_trips_raw_body() {
        let dir = tempfile::tempdir().unwrap();
        let body = json!({
            "username": "ab",
            "timestamp": "2026-01-01T00:00:00Z",
            "results": [{"platform": "GitHub", "status": "taken", "url": "https://github.com/ab"}],
            "suggestions": ["abhq", "ab_dev"]
        });
        let response = LookupResponse::from_value(body.clone()).unwrap();

        let path = Exporter::new(dir.path()).export_json(&response).unwrap();

        assert_eq!(path, dir.path().join("handle-scout-ab.json"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \""));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, body);
    }

    #[test]
    fn export_writes_keys_in_received_order() {
        let dir = tempfile::tempdir().unwrap();
        let body: Value = serde_json::from_str(
            r#"{"username":"ab","timestamp":"t","results":[{"status":"available","platform":"X"}],"suggestions":[]}"#,
        )
        .unwrap();
        let response = LookupResponse::from_value(body).unwrap();

        let path = Exporter::new(dir.path()).export_json(&response).unwrap();
        let text = std::fs::read_to_string(path).unwrap();

        let keys: Vec<usize> = ["\"username\"", "\"timestamp\"", "\"results\"", "\"suggestions\""]
            .iter()
            .map(|k| text.find(k).unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.find("\"status\"").unwrap() < text.find("\"platform\"").unwrap());
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let response = LookupResponse::from_value(json!({"username": "ab", "results": []})).unwrap();

        let err = Exporter::new(dir.path().join("missing"))
            .export_json(&response)
            .unwrap_err();

        assert!(matches!(err, ExportError::Io { .. }));
    }
}
