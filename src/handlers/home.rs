use axum::response::Html;
use tracing::debug;

use crate::pages;

/// Home page with an empty item form
pub async fn home() -> Html<String> {
    debug!("Home page requested");
    Html(pages::home_page(None))
}
