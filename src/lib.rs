//! Aurora Users API
//!
//! A small REST service exposing create, read, update and delete
//! operations on user records under `/api/users`, backed by either an
//! in-memory store or PostgreSQL.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::storage::StorageFactory;
use tracing::info;

/// Create the application state from the default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with the repository selected by `config`
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let users = StorageFactory::create_user_repository(&config.storage).await?;
    info!(backend = ?config.storage.backend, "User repository initialized");

    Ok(AppState::new(users))
}
