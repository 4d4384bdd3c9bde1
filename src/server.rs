use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    spotify::SpotifyClient,
};

/// Builds the application router.
///
/// The route set is mounted at the root and, when `mount_prefix` is set,
/// a second time under that prefix. Both mounts share one state.
pub fn app(state: AppState, mount_prefix: Option<&str>) -> Router {
    let mut router = api::routes();
    if let Some(prefix) = mount_prefix {
        router = router.nest(prefix, api::routes());
    }

    router
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.server_addr` and serves until the process is stopped.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", config.server_addr, e))?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    serve(listener, config).await
}

/// Serves on an already bound listener.
pub async fn serve(listener: tokio::net::TcpListener, config: Config) -> Res<()> {
    let config = Arc::new(config);
    let spotify = SpotifyClient::new(Arc::clone(&config))?;
    let app = app(AppState::new(spotify), config.mount_prefix.as_deref());

    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        prefix = ?config.mount_prefix,
        upstream = %config.api_url,
        "notspotify listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
