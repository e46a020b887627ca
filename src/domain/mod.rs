//! Domain layer - Core entities and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{User, UserId, UserPayload, UserRepository, UserValidationError};
