//! # API Module
//!
//! HTTP route handlers of the notspotify web server.
//!
//! ## Endpoints
//!
//! ### Pages
//!
//! - `/`, `/index.html`, `/artists.html`, `/albums.html`, `/tracks.html`,
//!   `/about.html` - static pages, no upstream calls
//!
//! ### Lookup proxy
//!
//! - `/v1/artists`, `/v1/album`, `/v1/track` - accept an optional `id` or
//!   `name` query parameter and forward to the matching Web API operation.
//!   The upstream body is passed through unchanged.
//!
//! ### Authentication
//!
//! - [`login`] - client-credentials exchange, answers with the raw token
//! - [`callback`] - landing route of the authorization-code redirect
//!
//! ### Monitoring
//!
//! - [`health`] - status and version for liveness checks
//!
//! ## Error Handling
//!
//! Handlers that call Spotify return
//! [`UpstreamError`](crate::error::UpstreamError), which renders as a 502 or
//! 504 JSON body.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::Extension;
//! use notspotify::api::{self, AppState};
//!
//! let app = api::routes().layer(Extension(state));
//! ```

mod callback;
mod health;
mod login;
mod lookup;
mod pages;

use axum::{Router, routing::get};

use crate::{management::TokenCache, spotify::SpotifyClient};

pub use callback::callback;
pub use health::health;
pub use login::login;

/// Shared state handed to every handler through an `Extension` layer.
#[derive(Debug, Clone)]
pub struct AppState {
    pub spotify: SpotifyClient,
    pub tokens: TokenCache,
}

impl AppState {
    pub fn new(spotify: SpotifyClient) -> Self {
        Self {
            spotify,
            tokens: TokenCache::new(),
        }
    }
}

/// The complete route set, without state or middleware.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/index.html", get(pages::index))
        .route("/artists.html", get(pages::artists))
        .route("/albums.html", get(pages::albums))
        .route("/tracks.html", get(pages::tracks))
        .route("/about.html", get(pages::about))
        .route("/v1/artists", get(lookup::artists))
        .route("/v1/album", get(lookup::albums))
        .route("/v1/track", get(lookup::tracks))
        .route("/login", get(login))
        .route("/spotifycallback", get(callback))
        .route("/health", get(health))
}
