use crate::{
    db::DbLists,
    models::{ErrorResponse, ListResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Read a list and its items as JSON
pub async fn get_list(
    State(db): State<Arc<DbLists>>,
    Path(list_id): Path<String>,
) -> Result<(StatusCode, Json<ListResponse>), (StatusCode, Json<ErrorResponse>)> {
    // Parse the list_id as an UUID
    let list_uuid = match Uuid::parse_str(&list_id) {
        Ok(uuid) => uuid,
        Err(e) => {
            error!("Invalid list UUID '{}': {}", list_id, e);
            let status = StatusCode::BAD_REQUEST;
            return Err((status, Json(ErrorResponse::new(status, format!("Invalid list UUID '{}'", list_id)))));
        }
    };

    let list = match db.get_list(list_uuid).await {
        Ok(Some(list)) => list,
        Ok(None) => {
            info!("List not found: {}", list_uuid);
            let status = StatusCode::NOT_FOUND;
            return Err((status, Json(ErrorResponse::new(status, format!("List '{}' not found", list_id)))));
        }
        Err(e) => {
            error!("Database error loading list '{}': {}", list_uuid, e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            return Err((status, Json(ErrorResponse::new(status, format!("Failed to load list '{}'", list_id)))));
        }
    };

    let items = match db.list_items(list_uuid).await {
        Ok(items) => items,
        Err(e) => {
            error!("Database error loading items of list '{}': {}", list_uuid, e);
            let status = StatusCode::INTERNAL_SERVER_ERROR;
            return Err((status, Json(ErrorResponse::new(status, format!("Failed to load list '{}'", list_id)))));
        }
    };

    Ok((StatusCode::OK, Json(ListResponse::new(list, items))))
}
