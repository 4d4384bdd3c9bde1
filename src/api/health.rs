use axum::{Extension, response::Json};
use serde_json::{Value, json};

use super::AppState;

/// Liveness check. Does not call Spotify.
pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstream": state.spotify.config().api_url,
    }))
}
