//! User infrastructure module
//!
//! Repository implementations for user records: an in-memory store and a
//! PostgreSQL store.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
