//! Migrate command - brings the PostgreSQL schema up to date

use tracing::info;

use crate::config::StorageBackend;
use crate::infrastructure::storage::{PostgresMigrator, StorageFactory, run_migrations};

pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    if config.storage.backend != StorageBackend::Postgres {
        info!("Storage backend is in-memory, no migrations to apply");
        return Ok(());
    }

    let pool = StorageFactory::connect_postgres(&config.storage).await?;
    run_migrations(&pool).await?;

    let version = PostgresMigrator::new(pool).current_version().await?;
    info!(version = ?version, "Database schema is up to date");

    Ok(())
}
