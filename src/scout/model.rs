//! Lookup endpoint data types
//!
//! The typed view is used for rendering; the raw JSON body is kept alongside
//! it so exports contain exactly what the server sent, including fields this
//! client does not know about (e.g. `timestamp`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated lookup, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Submit counter, used to correlate log lines with outcomes
    pub seq: u64,
    /// Trimmed, validated username
    pub username: String,
}

/// Availability classification of a platform status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
    Unknown,
}

impl Availability {
    /// Classify the server's status text. Anything unrecognised is `Unknown`.
    pub fn from_status(status: &str) -> Self {
        match status {
            "available" => Self::Available,
            "taken" => Self::Taken,
            _ => Self::Unknown,
        }
    }

    /// Style class used by the results table
    pub fn style_class(&self) -> &'static str {
        match self {
            Self::Available => "status-available",
            Self::Taken => "status-taken",
            Self::Unknown => "status-unknown",
        }
    }
}

/// One row of the lookup response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResult {
    pub platform: String,
    /// Status text as sent by the server ("available", "taken", "unknown", ...)
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form notes explaining the status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PlatformResult {
    pub fn availability(&self) -> Availability {
        Availability::from_status(&self.status)
    }

    /// Non-empty URL, if any
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Typed fields of a successful response body
#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    username: String,
    results: Vec<PlatformResult>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
}

/// A successful lookup response
#[derive(Debug, Clone, PartialEq)]
pub struct LookupResponse {
    pub username: String,
    pub results: Vec<PlatformResult>,
    /// Alternate names; `None` when the server omitted the field
    pub suggestions: Option<Vec<String>>,
    raw: Value,
}

impl LookupResponse {
    /// Build from a decoded JSON body. Fails when `results` is missing or
    /// any field has the wrong shape.
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        let body: ResponseBody = serde_json::from_value(raw.clone())?;
        Ok(Self {
            username: body.username,
            results: body.results,
            suggestions: body.suggestions,
            raw,
        })
    }

    /// The body exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Suggestions to display; empty when absent
    pub fn visible_suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }

    pub fn has_suggestions(&self) -> bool {
        !self.visible_suggestions().is_empty()
    }

    /// Pretty JSON of the raw body (2-space indentation)
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_body() {
        let response = LookupResponse::from_value(json!({
            "username": "ab",
            "results": [{"platform": "x", "status": "available"}]
        }))
        .unwrap();

        assert_eq!(response.username, "ab");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].url, None);
        assert_eq!(response.suggestions, None);
        assert!(!response.has_suggestions());
    }

    #[test]
    fn missing_results_is_an_error() {
        assert!(LookupResponse::from_value(json!({"username": "ab"})).is_err());
        assert!(LookupResponse::from_value(json!("not an object")).is_err());
    }

    #[test]
    fn null_url_and_reason_are_absent() {
        let response = LookupResponse::from_value(json!({
            "username": "ab",
            "results": [{"platform": "X", "status": "unknown", "url": null, "reason": null}],
            "suggestions": []
        }))
        .unwrap();

        assert_eq!(response.results[0].link(), None);
        assert_eq!(response.results[0].reason, None);
        assert_eq!(response.suggestions, Some(vec![]));
        assert!(!response.has_suggestions());
    }

    #[test]
    fn unknown_status_text_classifies_as_unknown() {
        assert_eq!(Availability::from_status("available"), Availability::Available);
        assert_eq!(Availability::from_status("taken"), Availability::Taken);
        assert_eq!(Availability::from_status("error"), Availability::Unknown);
        assert_eq!(Availability::from_status(""), Availability::Unknown);
    }

    #[test]
    fn raw_body_keeps_extra_fields() {
        let body = json!({
            "username": "ab",
            "timestamp": "2026-01-01T00:00:00Z",
            "results": [{"platform": "GitHub", "status": "taken", "http_status": 200}],
            "suggestions": ["abhq"]
        });
        let response = LookupResponse::from_value(body.clone()).unwrap();

        assert_eq!(response.raw(), &body);
        let reparsed: Value = serde_json::from_str(&response.to_pretty_json().unwrap()).unwrap();
        assert_eq!(reparsed, body);
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let response =
            LookupResponse::from_value(json!({"username": "ab", "results": []})).unwrap();
        let text = response.to_pretty_json().unwrap();

        assert!(text.contains("\n  \"username\": \"ab\""), "{text}");
    }

    #[test]
    fn pretty_json_keeps_server_key_order() {
        let body: Value = serde_json::from_str(
            r#"{"username":"ab","timestamp":"t","results":[],"suggestions":[]}"#,
        )
        .unwrap();
        let response = LookupResponse::from_value(body).unwrap();

        assert_eq!(
            response.to_pretty_json().unwrap(),
            "{\n  \"username\": \"ab\",\n  \"timestamp\": \"t\",\n  \"results\": [],\n  \"suggestions\": []\n}"
        );
    }
}
