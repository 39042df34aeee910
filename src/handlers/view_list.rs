use crate::{db::DbLists, pages};
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;
use tracing::{debug, error};

use super::{list_not_found, parse_list_id, PageError};

/// Show every item of a list in the order it was added
pub async fn view_list(
    State(db): State<Arc<DbLists>>,
    Path(list_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let list_uuid = parse_list_id(&list_id)?;

    match db.get_list(list_uuid).await {
        Ok(Some(_)) => {}
        Ok(None) => return Err(list_not_found(&list_id)),
        Err(e) => {
            error!("Failed to load list '{}': {}", list_uuid, e);
            return Err(super::internal_error());
        }
    }

    let items = match db.list_items(list_uuid).await {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to load items of list '{}': {}", list_uuid, e);
            return Err(super::internal_error());
        }
    };

    debug!("Rendering list '{}' with {} items", list_uuid, items.len());
    Ok(Html(pages::list_page(&list_uuid, &items, None)))
}
