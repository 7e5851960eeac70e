//! Interaction controller
//!
//! Owns the UI state machine and the single held response. Each user gesture
//! maps to one method:
//!
//! | gesture              | method             |
//! |----------------------|--------------------|
//! | Enter in the input   | `submit`           |
//! | lookup task finishes | `resolve`          |
//! | copy JSON            | `copy_json`        |
//! | suggestion chip      | `copy_suggestion`  |
//! | download JSON        | `download_json`    |
//! | open a result link   | `link_for_row`     |
//!
//! ```text
//!  Idle ──submit(valid)──► Loading ──resolve(Ok)──► Results
//!   │                        │  ▲                     │
//!   │ submit(invalid)        │  └──submit(valid)──────┤
//!   ▼                        ▼                        │
//!  Error ◄──resolve(Err)─────┘◄──submit(invalid)──────┘
//! ```

use super::client::LookupError;
use super::export::Exporter;
use super::model::{LookupRequest, LookupResponse};
use super::notify::{Notify, Tone};
use super::render::{render, ExternalLink, LinkCell, RenderModel};
use super::validate::{validate, INVALID_USERNAME};
use crate::clipboard::ClipboardService;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Error,
    Results,
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Error => "error",
            UiState::Results => "results",
        }
    }
}

/// What the UI may show and accept right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub submit_enabled: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    pub suggestions_visible: bool,
    pub export_enabled: bool,
}

#[derive(Debug, Default)]
pub struct Controller {
    state: UiState,
    error: Option<String>,
    /// Last successful response; `None` after any failure
    last: Option<LookupResponse>,
    /// Display model of `last`, rebuilt whenever it changes
    model: Option<RenderModel>,
    next_seq: u64,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_response(&self) -> Option<&LookupResponse> {
        self.last.as_ref()
    }

    pub fn render_model(&self) -> Option<&RenderModel> {
        self.model.as_ref()
    }

    pub fn affordances(&self) -> Affordances {
        // A previous result stays on screen while a new lookup is in flight
        let results_visible = self.last.is_some() && self.state != UiState::Error;
        Affordances {
            submit_enabled: self.state != UiState::Loading,
            loading_visible: self.state == UiState::Loading,
            results_visible,
            suggestions_visible: results_visible
                && self.model.as_ref().is_some_and(RenderModel::show_suggestions),
            export_enabled: self.last.is_some(),
        }
    }

    /// Start a lookup for `raw`.
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// a lookup is already in flight, or the input failed validation (the
    /// controller is then in `Error` with the held response cleared).
    pub fn submit(&mut self, raw: &str) -> Option<LookupRequest> {
        if self.state == UiState::Loading {
            tracing::debug!("Submit ignored while a lookup is in flight");
            return None;
        }

        let username = raw.trim();
        if !validate(username) {
            tracing::debug!("Rejected username input {:?}", raw);
            self.fail(INVALID_USERNAME.to_string());
            return None;
        }

        self.next_seq += 1;
        self.state = UiState::Loading;
        self.error = None;

        let request = LookupRequest {
            seq: self.next_seq,
            username: username.to_string(),
        };
        tracing::info!(seq = request.seq, "Checking {}", request.username);
        Some(request)
    }

    /// Apply the outcome of a lookup. Outcomes are applied in the order they
    /// arrive; the last one wins.
    pub fn resolve(&mut self, seq: u64, outcome: Result<LookupResponse, LookupError>) {
        match outcome {
            Ok(response) => {
                tracing::info!(
                    seq,
                    suggestions = response.has_suggestions(),
                    "Lookup for {} returned {} result(s)",
                    response.username,
                    response.results.len()
                );
                self.model = Some(render(&response));
                self.last = Some(response);
                self.error = None;
                self.state = UiState::Results;
            }
            Err(e) => {
                tracing::warn!(seq, "Lookup failed: {}", e);
                self.fail(e.user_message().to_string());
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.state = UiState::Error;
        self.error = Some(message);
        self.last = None;
        self.model = None;
    }

    /// Copy the held response as pretty JSON
    pub fn copy_json(&self, clipboard: &mut ClipboardService, notifier: &mut dyn Notify) -> bool {
        let Some(response) = &self.last else {
            return false;
        };
        let text = response.to_pretty_json().unwrap_or_default();
        clipboard.copy_text(&text, "JSON", notifier)
    }

    /// Copy the text of one suggestion chip
    pub fn copy_suggestion(
        &self,
        index: usize,
        clipboard: &mut ClipboardService,
        notifier: &mut dyn Notify,
    ) -> bool {
        let Some(chip) = self.model.as_ref().and_then(|m| m.chips.get(index)) else {
            return false;
        };
        clipboard.copy_text(&chip.text, &format!("\"{}\"", chip.text), notifier)
    }

    /// Write the held response to a file; returns its path
    pub fn download_json(&self, exporter: &Exporter, notifier: &mut dyn Notify) -> Option<PathBuf> {
        let response = self.last.as_ref()?;
        match exporter.export_json(response) {
            Ok(path) => {
                notifier.notify(&format!("Saved {}", path.display()), Tone::Info);
                Some(path)
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                notifier.notify(&format!("Download failed: {}", e), Tone::Error);
                None
            }
        }
    }

    /// External link of a results row, if it has one
    pub fn link_for_row(&self, row: usize) -> Option<&ExternalLink> {
        match &self.model.as_ref()?.rows.get(row)?.link {
            LinkCell::External(link) => Some(link),
            LinkCell::Placeholder => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardBackend;
    use crate::scout::client::{GENERIC_FAILURE, NETWORK_FAILURE};
    use crate::scout::notify::RecordingNotifier;
    use reqwest::StatusCode;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl ClipboardBackend for Capture {
        fn name(&self) -> &str {
            "capture"
        }

        fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn response(suggestions: serde_json::Value) -> LookupResponse {
        LookupResponse::from_value(json!({
            "username": "ab",
            "results": [
                {"platform": "GitHub", "status": "taken", "url": "https://github.com/ab"},
                {"platform": "GitLab", "status": "available"}
            ],
            "suggestions": suggestions
        }))
        .unwrap()
    }

    fn request_failure(detail: Option<&str>) -> LookupError {
        LookupError::Request {
            status: StatusCode::BAD_REQUEST,
            detail: detail.map(str::to_string),
        }
    }

    fn with_results() -> Controller {
        let mut controller = Controller::new();
        let request = controller.submit("ab").unwrap();
        controller.resolve(request.seq, Ok(response(json!(["abhq"]))));
        controller
    }

    #[test]
    fn starts_idle() {
        let controller = Controller::new();
        let ui = controller.affordances();

        assert_eq!(controller.state(), UiState::Idle);
        assert!(ui.submit_enabled);
        assert!(!ui.loading_visible && !ui.results_visible && !ui.export_enabled);
    }

    #[test]
    fn valid_submit_enters_loading() {
        let mut controller = Controller::new();

        let request = controller.submit("  john.doe  ").unwrap();

        assert_eq!(request.username, "john.doe");
        assert_eq!(controller.state(), UiState::Loading);
        let ui = controller.affordances();
        assert!(!ui.submit_enabled);
        assert!(ui.loading_visible);
        assert_eq!(controller.error_message(), None);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut controller = Controller::new();
        controller.submit("ab").unwrap();

        assert!(controller.submit("abc").is_none());
        assert_eq!(controller.state(), UiState::Loading);
    }

    #[test]
    fn invalid_submit_clears_held_response() {
        let mut controller = with_results();

        assert!(controller.submit("a").is_none());

        assert_eq!(controller.state(), UiState::Error);
        assert_eq!(controller.error_message(), Some(INVALID_USERNAME));
        assert!(controller.last_response().is_none());
        let ui = controller.affordances();
        assert!(!ui.results_visible && !ui.suggestions_visible && !ui.export_enabled);
        assert!(ui.submit_enabled);
    }

    #[test]
    fn success_shows_results_and_suggestions() {
        let controller = with_results();
        let ui = controller.affordances();

        assert_eq!(controller.state(), UiState::Results);
        assert!(ui.results_visible && ui.suggestions_visible && ui.export_enabled);
        assert!(ui.submit_enabled && !ui.loading_visible);
        assert_eq!(controller.render_model().unwrap().rows.len(), 2);
    }

    #[test]
    fn empty_or_missing_suggestions_hide_panel() {
        for suggestions in [json!([]), json!(null)] {
            let mut controller = Controller::new();
            let request = controller.submit("ab").unwrap();
            controller.resolve(request.seq, Ok(response(suggestions)));

            assert!(controller.affordances().results_visible);
            assert!(!controller.affordances().suggestions_visible);
        }
    }

    #[test]
    fn previous_results_stay_visible_while_loading() {
        let mut controller = with_results();
        controller.submit("abc").unwrap();

        let ui = controller.affordances();
        assert!(ui.results_visible && ui.export_enabled);
        assert!(!ui.submit_enabled);
    }

    #[test]
    fn failure_uses_server_detail() {
        let mut controller = with_results();
        let request = controller.submit("ab").unwrap();

        controller.resolve(request.seq, Err(request_failure(Some("taken by admin"))));

        assert_eq!(controller.state(), UiState::Error);
        assert_eq!(controller.error_message(), Some("taken by admin"));
        assert!(controller.last_response().is_none());
        let ui = controller.affordances();
        assert!(!ui.results_visible && !ui.export_enabled && ui.submit_enabled);
    }

    #[test]
    fn failure_without_detail_uses_generic_message() {
        let mut controller = Controller::new();
        let request = controller.submit("ab").unwrap();

        controller.resolve(request.seq, Err(request_failure(None)));
        assert_eq!(controller.error_message(), Some(GENERIC_FAILURE));

        let request = controller.submit("ab").unwrap();
        controller.resolve(request.seq, Err(LookupError::Malformed("no results".into())));
        assert_eq!(controller.error_message(), Some(GENERIC_FAILURE));
    }

    #[tokio::test]
    async fn network_failure_message() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = reqwest::get(format!("http://{}", addr)).await.unwrap_err();

        let mut controller = Controller::new();
        let request = controller.submit("ab").unwrap();
        controller.resolve(request.seq, Err(LookupError::Network(err)));

        assert_eq!(controller.error_message(), Some(NETWORK_FAILURE));
    }

    #[test]
    fn resubmitting_same_name_issues_fresh_request() {
        let mut controller = with_results();

        let first = controller.submit("ab").unwrap();
        controller.resolve(first.seq, Ok(response(json!([]))));
        let second = controller.submit("ab").unwrap();

        assert_eq!(first.username, second.username);
        assert!(second.seq > first.seq);
    }

    #[test]
    fn copy_json_copies_pretty_raw_body() {
        let controller = with_results();
        let capture = Capture::default();
        let mut clipboard = ClipboardService::new(Some(Box::new(capture.clone())), None);
        let mut notes = RecordingNotifier::default();

        assert!(controller.copy_json(&mut clipboard, &mut notes));

        let copied = capture.0.lock().unwrap()[0].clone();
        let parsed: serde_json::Value = serde_json::from_str(&copied).unwrap();
        assert_eq!(&parsed, controller.last_response().unwrap().raw());
        assert_eq!(notes.messages[0].0, "Copied JSON to clipboard.");
    }

    #[test]
    fn copy_without_response_is_noop() {
        let controller = Controller::new();
        let capture = Capture::default();
        let mut clipboard = ClipboardService::new(Some(Box::new(capture.clone())), None);
        let mut notes = RecordingNotifier::default();

        assert!(!controller.copy_json(&mut clipboard, &mut notes));
        assert!(!controller.copy_suggestion(0, &mut clipboard, &mut notes));
        assert!(capture.0.lock().unwrap().is_empty());
        assert!(notes.messages.is_empty());
    }

    #[test]
    fn suggestion_chip_copies_literal_text() {
        let controller = with_results();
        let capture = Capture::default();
        let mut clipboard = ClipboardService::new(Some(Box::new(capture.clone())), None);
        let mut notes = RecordingNotifier::default();

        assert!(controller.copy_suggestion(0, &mut clipboard, &mut notes));
        assert!(!controller.copy_suggestion(1, &mut clipboard, &mut notes));

        assert_eq!(*capture.0.lock().unwrap(), vec!["abhq".to_string()]);
        assert_eq!(notes.messages[0].0, "Copied \"abhq\" to clipboard.");
    }

    #[test]
    fn download_writes_file_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path());
        let mut notes = RecordingNotifier::default();

        assert!(Controller::new().download_json(&exporter, &mut notes).is_none());

        let path = with_results().download_json(&exporter, &mut notes).unwrap();
        assert_eq!(path.file_name().unwrap(), "handle-scout-ab.json");
        assert_eq!(notes.messages.len(), 1);
        assert_eq!(notes.messages[0].1, Tone::Info);
    }

    #[test]
    fn links_follow_rendered_rows() {
        let controller = with_results();

        let link = controller.link_for_row(0).unwrap();
        assert_eq!(link.href, "https://github.com/ab");
        assert_eq!(link.label, "View");
        assert_eq!(controller.link_for_row(1).map(|l| &l.href), None);
        assert_eq!(controller.link_for_row(9).map(|l| &l.href), None);
    }
}
