//! Configuration management for notspotify.
//!
//! This module handles loading configuration values from environment variables
//! and `.env` files. Spotify credentials are never compiled into the binary;
//! they are read from the environment at startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf, time::Duration};

use crate::error::ConfigError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration of the server and the Spotify client.
#[derive(Clone)]
pub struct Config {
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: String,
    /// Accounts service endpoint used for token exchanges.
    pub token_url: String,
    /// Base URL of the Web API, without trailing slash.
    pub api_url: String,
    /// Per-request timeout for every upstream call.
    pub timeout: Duration,
    /// Optional extra mount point for the whole route set, e.g. `/notspotify/api`.
    pub mount_prefix: Option<String>,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when the client id or secret is not
    /// set and [`ConfigError::Invalid`] when a URL or the timeout cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let timeout_secs = match get("SPOTIFY_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::Invalid {
                    key: "SPOTIFY_API_TIMEOUT_SECS",
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "SPOTIFY_API_TIMEOUT_SECS",
                reason: "must be at least 1 second".to_string(),
            });
        }

        let api_url = get("SPOTIFY_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let token_url = get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        for (key, value) in [("SPOTIFY_API_URL", &api_url), ("SPOTIFY_API_TOKEN_URL", &token_url)] {
            reqwest::Url::parse(value).map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            })?;
        }

        Ok(Self {
            server_addr: get("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            token_url,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            mount_prefix: get("NOTSPOTIFY_MOUNT_PREFIX").and_then(|p| normalize_prefix(&p)),
        })
    }

    /// Replaces the mount prefix, normalizing it the same way as the environment value.
    pub fn with_mount_prefix(mut self, prefix: Option<&str>) -> Self {
        self.mount_prefix = prefix.and_then(normalize_prefix);
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("server_addr", &self.server_addr)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("mount_prefix", &self.mount_prefix)
            .finish()
    }
}

/// Turns `notspotify/api/` or `/notspotify/api` into `/notspotify/api`.
///
/// Returns `None` for an empty prefix or a bare `/`, which mean "no extra mount".
pub fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{trimmed}"))
}

/// Loads environment variables from a `.env` file.
///
/// Looks for `notspotify/.env` in the platform-specific local data directory
/// first and falls back to a `.env` in the working directory. A missing file
/// is not an error; the process environment alone may carry the settings.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/notspotify/.env`
/// - macOS: `~/Library/Application Support/notspotify/.env`
/// - Windows: `%LOCALAPPDATA%/notspotify/.env`
///
/// # Returns
///
/// The path of the file that was loaded, if any.
///
/// # Errors
///
/// Fails when the data directory cannot be created or a `.env` file exists
/// but cannot be parsed.
pub async fn load_env() -> Result<Option<PathBuf>, ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Dotenv(e.to_string()))?;
        return Ok(Some(path));
    }

    match dotenv::dotenv() {
        Ok(local) => Ok(Some(local)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::Dotenv(e.to_string())),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("notspotify/.env");
    path
}
