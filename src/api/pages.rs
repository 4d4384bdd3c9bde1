//! Static pages of the web front end, embedded at compile time.

use axum::response::Html;

pub(crate) const INDEX_HTML: &str = include_str!("../../templates/index.html");
const ARTISTS_HTML: &str = include_str!("../../templates/artists.html");
const ALBUMS_HTML: &str = include_str!("../../templates/albums.html");
const TRACKS_HTML: &str = include_str!("../../templates/tracks.html");
const ABOUT_HTML: &str = include_str!("../../templates/about.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn artists() -> Html<&'static str> {
    Html(ARTISTS_HTML)
}

pub async fn albums() -> Html<&'static str> {
    Html(ALBUMS_HTML)
}

pub async fn tracks() -> Html<&'static str> {
    Html(TRACKS_HTML)
}

pub async fn about() -> Html<&'static str> {
    Html(ABOUT_HTML)
}
