//! User Service Library
//!
//! HTTP API for creating and reading user profiles stored in a relational
//! database through SeaORM.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::routes::create_router;
use crate::service::UserManager;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Arc::new(Database::connect(&config.database).await?);

    // Create repository and service
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo));

    let state = AppState::new(user_service, db);
    let app = create_router(state);

    let addr: SocketAddr = config.service.addr().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Received shutdown signal, draining connections...");
}
