use utoipa::OpenApi;
use crate::models::*;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/api/ready",
    responses(
        (status = 200, description = "Database is reachable", body = ReadyResponse),
        (status = 503, description = "Database is not reachable", body = ReadyResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// Read a list with its items in creation order
#[utoipa::path(
    get,
    path = "/api/v1/lists/{list_id}",
    params(
        ("list_id" = String, Path, description = "UUID of the list")
    ),
    responses(
        (status = 200, description = "The list and its items", body = ListResponse),
        (status = 400, description = "The id is not a UUID", body = ErrorResponse),
        (status = 404, description = "No such list", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_list_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        ready_check_doc,
        get_list_doc,
    ),
    components(
        schemas(HealthResponse, ReadyResponse, ListResponse, ItemResponse, ErrorResponse)
    ),
    tags(
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
