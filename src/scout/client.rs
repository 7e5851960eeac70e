//! HTTP client for the lookup endpoint
//!
//! `GET {base}/api/check?username=...`. Every outcome is classified into a
//! `LookupResponse` or one of the `LookupError` kinds; the controller turns
//! those into the text of the error slot.

use super::model::{LookupRequest, LookupResponse};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Error slot text when the server gave no usable `detail`
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Error slot text when the request never completed
pub const NETWORK_FAILURE: &str = "Network error. Please try again.";

/// Why a lookup did not produce a response
#[derive(Debug, Error)]
pub enum LookupError {
    /// Non-2xx status. `detail` is the server's message, if it sent one
    #[error("lookup failed with status {status}")]
    Request {
        status: StatusCode,
        detail: Option<String>,
    },

    /// The request could not complete (offline, DNS, connection reset)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx status but the body is not a lookup response
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Text for the single error slot
    pub fn user_message(&self) -> &str {
        match self {
            Self::Request {
                detail: Some(detail),
                ..
            } => detail,
            Self::Request { detail: None, .. } | Self::Malformed(_) => GENERIC_FAILURE,
            Self::Network(_) => NETWORK_FAILURE,
        }
    }
}

/// Client for the lookup service
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted, so each
/// spawned lookup task gets its own handle.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one lookup. No timeout and no retry: a failure is final for
    /// this attempt.
    pub async fn check(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError> {
        let url = format!("{}/api/check", self.base_url);
        tracing::debug!(seq = request.seq, username = %request.username, "Sending lookup");

        let response = self
            .http
            .get(&url)
            .query(&[("username", request.username.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        let parsed: Option<Value> = serde_json::from_slice(&body).ok();

        if !status.is_success() {
            let detail = parsed.as_ref().and_then(detail_of);
            tracing::debug!(seq = request.seq, %status, ?detail, "Lookup rejected");
            return Err(LookupError::Request { status, detail });
        }

        let value = parsed.ok_or_else(|| LookupError::Malformed("body is not JSON".to_string()))?;
        LookupResponse::from_value(value).map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

/// Non-empty string `detail` field of an error body
fn detail_of(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}
