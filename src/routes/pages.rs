use crate::{db::DbLists, handlers::{add_item, home, new_list, view_list}};
use axum::{routing::{get, post}, Router};
use std::sync::Arc;

/// Create the HTML page routes
pub fn create_page_routes(db: Arc<DbLists>) -> Router {
    Router::<Arc<DbLists>>::new()
        .route("/", get(home).post(new_list))
        .route("/lists/new", post(new_list))
        .route("/lists/:list_id/", get(view_list))
        .route("/lists/:list_id/add_item", post(add_item))
        .with_state(db)
}
