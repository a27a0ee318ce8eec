//! Gatehouse API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use gatehouse_core::AppError;
use gatehouse_infrastructure::InMemorySecurityRepository;
use tracing::{info, warn};

use crate::api_config::{ApiConfig, StorageBackend, init_tracing};
use crate::api_services::{RepositorySet, build_app_state, connect_and_migrate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let repositories = match &config.storage_backend {
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = connect_and_migrate(database_url, *max_connections).await?;
            if config.migrate_only {
                info!("migrations finished, exiting");
                return Ok(());
            }
            RepositorySet::postgres(&pool)
        }
        StorageBackend::Memory => {
            warn!(
                directory_users = config.memory_users.len(),
                "using in-memory storage, data is lost on restart"
            );
            RepositorySet::in_memory(Arc::new(InMemorySecurityRepository::with_users(
                config.memory_users.clone(),
            )))
        }
    };

    let app_state = build_app_state(repositories, config.storage_backend.as_str());
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind API listener: {error}")))?;

    info!(%address, storage_backend = config.storage_backend.as_str(), "gatehouse api listening");
    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server failed: {error}")))
}
