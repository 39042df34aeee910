use crate::{db::DbLists, models::ItemForm, pages};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{list_not_found, parse_list_id, redirect_found, PageError};

/// Append an item to an existing list
pub async fn add_item(
    State(db): State<Arc<DbLists>>,
    Path(list_id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Response, PageError> {
    let list_uuid = parse_list_id(&list_id)?;

    let text = match form.text() {
        Some(text) => text,
        None => {
            warn!("Rejected empty item for list '{}'", list_uuid);
            // Re-render the list so the user keeps their context
            let items = match db.get_list(list_uuid).await {
                Ok(Some(_)) => db.list_items(list_uuid).await.map_err(|e| {
                    error!("Failed to load items of list '{}': {}", list_uuid, e);
                    super::internal_error()
                })?,
                Ok(None) => return Err(list_not_found(&list_id)),
                Err(e) => {
                    error!("Failed to load list '{}': {}", list_uuid, e);
                    return Err(super::internal_error());
                }
            };
            return Err((
                StatusCode::BAD_REQUEST,
                Html(pages::list_page(&list_uuid, &items, Some(pages::EMPTY_ITEM_ERROR))),
            ));
        }
    };

    match db.add_item(list_uuid, text).await {
        Ok(Some(item)) => info!("Item {} added to list '{}'", item.id, list_uuid),
        Ok(None) => return Err(list_not_found(&list_id)),
        Err(e) => {
            error!("Failed to add item to list '{}': {}", list_uuid, e);
            return Err(super::internal_error());
        }
    }

    Ok(redirect_found(&pages::list_url(&list_uuid)))
}
