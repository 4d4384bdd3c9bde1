use std::collections::HashMap;

use axum::{Extension, extract::Query};

use crate::{
    error::UpstreamError,
    spotify::UpstreamBody,
    types::{LookupQuery, ResourceKind},
};

use super::AppState;

pub async fn artists(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<UpstreamBody, UpstreamError> {
    forward(&state, ResourceKind::Artist, &params).await
}

pub async fn albums(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<UpstreamBody, UpstreamError> {
    forward(&state, ResourceKind::Album, &params).await
}

pub async fn tracks(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<AppState>,
) -> Result<UpstreamBody, UpstreamError> {
    forward(&state, ResourceKind::Track, &params).await
}

async fn forward(
    state: &AppState,
    kind: ResourceKind,
    params: &HashMap<String, String>,
) -> Result<UpstreamBody, UpstreamError> {
    let query = LookupQuery::from_params(params);
    tracing::info!(kind = kind.search_type(), ?query, "catalog lookup");

    let token = state.tokens.valid_token(&state.spotify).await?;
    state.spotify.lookup(&token, kind, &query).await
}
