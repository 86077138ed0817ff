//! Release announcement page.

use axum::response::Html;

use crate::config::HOME_MESSAGE;

/// Serves the current release announcement.
///
/// Query strings and headers are ignored; the body is always the same.
pub async fn index() -> Html<&'static str> {
    Html(HOME_MESSAGE)
}
