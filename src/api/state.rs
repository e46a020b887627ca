//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::UserRepository;

/// Handler dependencies, injected at construction
#[derive(Debug, Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::InMemoryUserRepository;

    #[test]
    fn test_debug_shows_repository() {
        let state = AppState::new(Arc::new(InMemoryUserRepository::new()));

        let rendered = format!("{:?}", state);
        assert!(rendered.contains("AppState"));
        assert!(rendered.contains("InMemoryUserRepository"));
    }
}
