//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Storage for user records keyed by [`UserId`]
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// List every user in store order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Insert when `user` has no id, otherwise replace the record with that id.
    /// Returns the stored record, carrying the assigned id on insert.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    async fn exists_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Remove the record; a missing id is a no-op
    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError>;
}
