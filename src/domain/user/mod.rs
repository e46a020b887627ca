//! User domain
//!
//! Domain types for the user resource: the entity, its request payload,
//! payload validation and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId, UserPayload};
pub use repository::UserRepository;
pub use validation::UserValidationError;

#[cfg(test)]
pub use repository::MockUserRepository;
