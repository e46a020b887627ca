//! Storage backends and schema management

pub mod factory;
pub mod migrations;

pub use factory::StorageFactory;
pub use migrations::{run_migrations, Migration, PostgresMigrator};
