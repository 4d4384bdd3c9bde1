use axum::{extract::Query, response::Html};

use crate::types::CallbackParams;

use super::pages::INDEX_HTML;

/// Landing route for the authorization-code redirect.
///
/// The code is not exchanged and no session is created; the route reports
/// what it received and shows the home page.
pub async fn callback(Query(params): Query<CallbackParams>) -> Html<&'static str> {
    if let Some(error) = params.error.as_deref() {
        tracing::warn!(%error, state = ?params.state, "authorization was denied");
    } else if params.code.is_some() {
        tracing::info!(state = ?params.state, "authorization code received, not exchanged");
    } else {
        tracing::warn!("callback hit without code or error");
    }

    Html(INDEX_HTML)
}
