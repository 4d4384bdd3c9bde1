use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config::Config, error, spotify::SpotifyClient, success, utils};

/// Requests one client-credentials token and prints its metadata.
///
/// The token value itself is not printed, only its length.
pub async fn token(config: Config) {
    let client = match SpotifyClient::new(Arc::new(config)) {
        Ok(c) => c,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Requesting client-credentials token...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let token = client.request_client_credentials_token().await;
    pb.finish_and_clear();

    match token {
        Ok(t) => {
            success!("Token obtained.");
            let table = Table::new(vec![utils::token_table_row(&t, utils::now_timestamp())]);
            println!("{}", table);
        }
        Err(e) => error!("Token exchange failed. Err: {}", e),
    }
}
