//! Error types for upstream calls and configuration.
//!
//! Every failure of the Spotify API or accounts service is mapped onto
//! [`UpstreamError`], which renders as a JSON body with a gateway status code
//! instead of surfacing as an unhandled fault.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

/// Failure talking to the Spotify Web API or accounts service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, DNS, TLS or timeout failure before a response arrived.
    #[error("upstream unavailable: {message}")]
    Unavailable { message: String, timed_out: bool },

    /// The upstream answered with a non-2xx status.
    #[error("upstream rejected the request with status {status}")]
    Rejected { status: u16, body: String },

    /// The upstream answered 2xx but the body lacked expected fields.
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

impl UpstreamError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::Unavailable { timed_out: true, .. } => StatusCode::GATEWAY_TIMEOUT,
            UpstreamError::Unavailable { .. } => StatusCode::BAD_GATEWAY,
            UpstreamError::Rejected { .. } => StatusCode::BAD_GATEWAY,
            UpstreamError::Malformed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            UpstreamError::Unavailable { .. } => "UPSTREAM_UNAVAILABLE",
            UpstreamError::Rejected { .. } => "UPSTREAM_REJECTED",
            UpstreamError::Malformed(_) => "MALFORMED_UPSTREAM_RESPONSE",
        }
    }

    /// Client-facing JSON body. The upstream body of a rejection stays in the logs.
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "error": true,
            "code": self.error_code(),
            "message": self.to_string(),
        });
        if let UpstreamError::Rejected { status, .. } = self {
            body["upstream_status"] = json!(status);
        }
        body
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return UpstreamError::Rejected {
                status: status.as_u16(),
                body: String::new(),
            };
        }
        if err.is_decode() {
            return UpstreamError::Malformed(err.to_string());
        }
        UpstreamError::Unavailable {
            message: err.to_string(),
            timed_out: err.is_timeout(),
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        match &self {
            UpstreamError::Rejected { status, body } => {
                tracing::warn!(upstream_status = status, upstream_body = %body, "upstream rejected request")
            }
            other => tracing::error!(error = %other, "upstream call failed"),
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

/// Problems with the runtime configuration, all fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("cannot read .env file: {0}")]
    Dotenv(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
