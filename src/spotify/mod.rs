//! # Spotify Integration Module
//!
//! HTTP client for the two Spotify services notspotify talks to:
//!
//! - the **accounts service**, for OAuth 2.0 client-credentials token
//!   exchanges ([`auth`])
//! - the **Web API**, for artist, album and track lookups ([`catalog`])
//!
//! ```text
//! Route handlers (api)
//!          ↓
//! SpotifyClient ── TokenCache (management)
//!          ↓
//! reqwest (shared connection pool, per-request timeout)
//!          ↓
//! Spotify accounts service / Web API
//! ```
//!
//! All calls return [`UpstreamError`](crate::error::UpstreamError) on
//! failure. Lookup responses are not deserialized; their bodies are handed
//! back verbatim as an [`UpstreamBody`].

pub mod auth;
pub mod catalog;

use std::{sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use reqwest::Client;

use crate::{config::Config, error::UpstreamError};

/// Shared client for the accounts service and the Web API.
///
/// Cheap to clone; clones share one connection pool and one configuration.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: Arc<Config>,
}

impl SpotifyClient {
    /// Creates a client whose requests time out after `config.timeout`.
    ///
    /// # Errors
    ///
    /// Fails only when the TLS backend cannot be initialized.
    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(5)))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// An upstream response passed through to the caller unmodified.
#[derive(Debug, Clone)]
pub struct UpstreamBody {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl UpstreamBody {
    /// Reads a successful response in full, or turns a non-2xx one into
    /// [`UpstreamError::Rejected`] carrying the upstream status and body.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;
        Ok(Self {
            status,
            content_type,
            body,
        })
    }
}

impl IntoResponse for UpstreamBody {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}
