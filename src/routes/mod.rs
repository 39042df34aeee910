pub mod api;
pub mod pages;

pub use api::create_api_routes;
pub use pages::create_page_routes;

use crate::{db::DbLists, docs::ApiDoc};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assemble the whole application around one store
pub fn create_app(db: Arc<DbLists>) -> Router {
    Router::new()
        // Mount HTML pages
        .merge(create_page_routes(db.clone()))
        // Mount API routes
        .nest("/api", create_api_routes(db))
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
