use crate::{config::Config, error, info, server};

pub async fn serve(config: Config) {
    info!("Starting notspotify on {}", config.server_addr);
    if let Some(prefix) = &config.mount_prefix {
        info!("Routes are also mounted under {}", prefix);
    }

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
