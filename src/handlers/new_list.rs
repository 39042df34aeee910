use crate::{db::DbLists, models::ItemForm, pages};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{redirect_found, PageError};

/// Start a new list from the first submitted item
pub async fn new_list(
    State(db): State<Arc<DbLists>>,
    Form(form): Form<ItemForm>,
) -> Result<Response, PageError> {
    let text = match form.text() {
        Some(text) => text,
        None => {
            warn!("Rejected empty item for a new list");
            return Err((
                StatusCode::BAD_REQUEST,
                Html(pages::home_page(Some(pages::EMPTY_ITEM_ERROR))),
            ));
        }
    };

    let (list, _item) = match db.create_list_with_item(text).await {
        Ok(created) => created,
        Err(e) => {
            error!("Failed to create list: {}", e);
            return Err(super::internal_error());
        }
    };

    info!("New list '{}' started", list.id);
    Ok(redirect_found(&pages::list_url(&list.id)))
}
