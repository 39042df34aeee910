mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod pages;
mod routes;

use axum::http::HeaderValue;
use config::Config;
use db::DbLists;
use routes::create_app;
use std::panic;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "superlists=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    // The store is required, there is nothing to serve without it
    let db = match DbLists::connect(&config.db_url, config.db_max_connections).await {
        Ok(db) => {
            info!("Database initialized successfully");
            Arc::new(db)
        }
        Err(e) => {
            error!("Failed to initialize database '{}': {}", config.db_url, e);
            std::process::exit(1);
        }
    };

    let mut app_routes = create_app(db.clone());

    let origins: Vec<HeaderValue> = config
        .cors_origin_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();
    if !origins.is_empty() {
        info!("CORS enabled for {} origin(s)", origins.len());
        app_routes = app_routes.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    // Start the HTTP server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("🚀 Server running on http://{} ({})", config.server_address(), config.environment);
    if config.is_development() {
        info!("📚 Swagger UI available at http://{}/swagger", config.server_address());
    }

    axum::serve(listener, app_routes)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed to start");

    db.close().await;
    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
