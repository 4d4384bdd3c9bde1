use axum::Extension;

use crate::error::UpstreamError;

use super::AppState;

/// Performs a client-credentials exchange and answers with the raw token.
///
/// The token also replaces the one cached for lookups. Echoing it to the
/// caller exposes a bearer credential; keep this route off public deployments.
pub async fn login(Extension(state): Extension<AppState>) -> Result<String, UpstreamError> {
    let token = state.spotify.request_client_credentials_token().await?;
    let access_token = token.access_token.clone();
    tracing::info!(
        token_len = access_token.len(),
        expires_in = token.expires_in,
        "issued client-credentials token"
    );

    state.tokens.store(token).await;
    Ok(access_token)
}
