//! Storage factory for runtime backend selection

use std::sync::Arc;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

use super::migrations::run_migrations;

/// Factory for creating repository instances
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates the user repository selected by `config`.
    /// The Postgres backend is migrated before it is handed out.
    pub async fn create_user_repository(
        config: &StorageConfig,
    ) -> Result<Arc<dyn UserRepository>, DomainError> {
        match config.backend {
            StorageBackend::InMemory => {
                info!("Using in-memory user storage");
                Ok(Arc::new(InMemoryUserRepository::new()))
            }
            StorageBackend::Postgres => {
                info!("Using PostgreSQL user storage");
                let pool = Self::connect_postgres(config).await?;
                run_migrations(&pool).await?;
                Ok(Arc::new(PostgresUserRepository::new(pool)))
            }
        }
    }

    /// Opens a connection pool against the configured database
    pub async fn connect_postgres(config: &StorageConfig) -> Result<PgPool, DomainError> {
        let url = config.resolve_database_url().ok_or_else(|| {
            DomainError::configuration(
                "storage.database_url or DATABASE_URL is required for the postgres backend",
            )
        })?;

        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;
        info!("PostgreSQL connection established");

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;

    #[tokio::test]
    async fn test_create_in_memory_repository() {
        let config = StorageConfig::default();

        let repo = StorageFactory::create_user_repository(&config).await.unwrap();
        let saved = repo
            .save(User::new("Test User", "test@example.com"))
            .await
            .unwrap();

        assert!(saved.id().is_some());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_postgres_without_url_is_configuration_error() {
        if std::env::var("DATABASE_URL").is_ok() {
            return;
        }

        let config = StorageConfig {
            backend: StorageBackend::Postgres,
            database_url: None,
            max_connections: 1,
        };

        let result = StorageFactory::create_user_repository(&config).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
