use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Datelike, NaiveDate, Utc};

use crate::types::{AccessToken, TokenTableRow};

/// Value of the `Authorization` header for a client-credentials exchange.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{client_id}:{client_secret}");
    format!("Basic {}", STANDARD.encode(credentials))
}

pub fn now_timestamp() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

/// Search expression used when a lookup names neither an id nor a name.
///
/// The Web API cannot list a whole catalog, so "all" is scoped to releases
/// of the given date's year.
pub fn list_all_query(date: NaiveDate) -> String {
    format!("year:{}", date.year())
}

pub fn current_list_all_query() -> String {
    list_all_query(Utc::now().date_naive())
}

/// Seconds left before `token` expires, never negative.
pub fn seconds_remaining(token: &AccessToken, now: u64) -> u64 {
    token
        .obtained_at
        .saturating_add(token.expires_in)
        .saturating_sub(now)
}

pub fn token_table_row(token: &AccessToken, now: u64) -> TokenTableRow {
    TokenTableRow {
        token_type: token.token_type.clone(),
        expires_in: format!("{}s", seconds_remaining(token, now)),
        scope: token.scope.clone().unwrap_or_else(|| "-".to_string()),
        length: token.access_token.len(),
    }
}
