pub mod health;
pub mod home;
pub mod new_list;
pub mod add_item;
pub mod view_list;
pub mod list_api;

pub use health::*;
pub use home::*;
pub use new_list::*;
pub use add_item::*;
pub use view_list::*;
pub use list_api::*;

use crate::pages;
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tracing::info;
use uuid::Uuid;

/// Error half of the page handlers: a status and the page to show with it
pub type PageError = (StatusCode, Html<String>);

/// 302 redirect, the status browsers follow with a GET after a form post
pub fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub fn list_not_found(list_id: &str) -> PageError {
    info!("List not found: {}", list_id);
    (
        StatusCode::NOT_FOUND,
        Html(pages::message_page("List not found", &format!("There is no list '{}'.", list_id))),
    )
}

pub fn internal_error() -> PageError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(pages::message_page("Something went wrong", "Please try again later.")),
    )
}

/// Ids that are not UUIDs can never name a list, so they are reported as missing
pub fn parse_list_id(list_id: &str) -> Result<Uuid, PageError> {
    Uuid::parse_str(list_id).map_err(|_| list_not_found(list_id))
}
