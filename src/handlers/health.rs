use crate::{db::DbLists, models::{HealthResponse, ReadyResponse}};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{debug, error};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check endpoint, succeeds once the database answers
pub async fn ready_check(State(db): State<Arc<DbLists>>) -> (StatusCode, Json<ReadyResponse>) {
    debug!("Readiness check requested");
    match db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadyResponse {
                status: "ok".to_string(),
                database: "ok".to_string(),
            }),
        ),
        Err(e) => {
            error!("Database is not reachable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "unavailable".to_string(),
                    database: e.to_string(),
                }),
            )
        }
    }
}
