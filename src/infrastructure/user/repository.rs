//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct UserTable {
    rows: BTreeMap<UserId, User>,
    /// Highest id handed out or stored; never decreases, so deleted ids are not reused
    last_id: i64,
}

impl UserTable {
    fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }

    fn allocate_id(&mut self) -> Result<UserId, DomainError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| DomainError::storage("User id space exhausted"))?;
        self.last_id = next;
        Ok(UserId::new(next))
    }

    /// Store `user`, assigning the next id when it has none
    fn store(&mut self, user: User) -> Result<User, DomainError> {
        let (id, user) = match user.id() {
            Some(id) => {
                self.last_id = self.last_id.max(id.value());
                (id, user)
            }
            None => {
                let id = self.allocate_id()?;
                (id, user.with_id(id))
            }
        };

        self.rows.insert(id, user.clone());
        Ok(user)
    }
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable::empty())),
        }
    }

    /// Create a repository with initial users.
    /// Records without an id are numbered after the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut table = UserTable::empty();
        table.last_id = users
            .iter()
            .filter_map(|u| u.id())
            .map(|id| id.value())
            .max()
            .unwrap_or(0);

        for user in users {
            table.store(user)?;
        }

        Ok(Self {
            table: Arc::new(RwLock::new(table)),
        })
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut table = self.table.write().await;
        table.store(user)
    }

    async fn exists_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(id))
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        table.rows.remove(id);
        Ok(())
    }
}
