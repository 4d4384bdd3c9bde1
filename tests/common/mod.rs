//! Shared harness: a notspotify server on an ephemeral port, talking to a
//! WireMock server that stands in for both Spotify services.

#![allow(dead_code)]

use std::collections::HashMap;

use anyhow::Result;
use notspotify::{config::Config, server};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
/// `base64("client-id:client-secret")`
pub const BASIC_AUTH: &str = "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

pub struct TestApp {
    pub base_url: String,
    pub upstream: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn upstream_request_count(&self) -> usize {
        self.upstream
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

pub async fn spawn_app() -> Result<TestApp> {
    spawn_app_with(&[]).await
}

/// Configuration pointing both Spotify services at `upstream`;
/// `overrides` replace the generated environment entries.
pub fn test_config(upstream: &MockServer, overrides: &[(&str, &str)]) -> Result<Config> {
    let mut env: HashMap<String, String> = HashMap::from([
        ("SPOTIFY_API_AUTH_CLIENT_ID".to_string(), CLIENT_ID.to_string()),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET".to_string(), CLIENT_SECRET.to_string()),
        ("SPOTIFY_API_TOKEN_URL".to_string(), format!("{}/api/token", upstream.uri())),
        ("SPOTIFY_API_URL".to_string(), format!("{}/v1", upstream.uri())),
        ("SPOTIFY_API_TIMEOUT_SECS".to_string(), "2".to_string()),
    ]);
    for (key, value) in overrides {
        env.insert(key.to_string(), value.to_string());
    }
    Ok(Config::from_lookup(|key: &str| env.get(key).cloned())?)
}

/// Starts the app; `overrides` replace the generated environment entries.
pub async fn spawn_app_with(overrides: &[(&str, &str)]) -> Result<TestApp> {
    let upstream = MockServer::start().await;
    let config = test_config(&upstream, overrides)?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = server::serve(listener, config).await;
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        upstream,
        client: reqwest::Client::new(),
    })
}

/// Token endpoint answering `access_token`, expected to be hit `times` times.
pub async fn mount_token(upstream: &MockServer, access_token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_AUTH))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(times)
        .mount(upstream)
        .await;
}
