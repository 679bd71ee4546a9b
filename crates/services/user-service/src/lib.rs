//! User Service Library
//!
//! CRUD API for users over HTTP. Storage is pluggable: the backend is
//! chosen once at startup from `REPOSITORY_TYPE` (`memory` or `orm`).

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use common::ServiceConfig;

use crate::config::UserServiceConfig;
use crate::repository::create_repository;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server, reading storage settings from the environment.
///
/// An unknown or missing `REPOSITORY_TYPE` aborts startup.
pub async fn run_server(service: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env()?;
    run_server_with_config(service, config).await
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(
    service: ServiceConfig,
    config: UserServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // Build the one repository instance for the process
    let users = create_repository(config.repository, &config.database).await?;
    let state = AppState::new(users);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", service.host, service.port).parse()?;
    info!(
        "{} listening on {} ({} backend)",
        service.service_name, addr, config.repository
    );

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
