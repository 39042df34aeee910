use crate::{db::DbLists, handlers::{get_list, health_check, ready_check}};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(db: Arc<DbLists>) -> Router {
    Router::<Arc<DbLists>>::new()
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .route("/v1/lists/:list_id", get(get_list))
        .with_state(db)
}
