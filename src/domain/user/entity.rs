//! User entity and related types

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{first_error, validate_not_blank, UserValidationError};

/// Numeric user identifier, assigned by the repository on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Absent until the record has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    name: String,
    email: String,
}

impl User {
    /// Create an unsaved user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Mark the record as persisted under `id`
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    // Mutators

    /// Copy the mutable fields from `payload`; `id` is never touched
    pub fn apply(&mut self, payload: &UserPayload) {
        self.name = payload.name.clone();
        self.email = payload.email.clone();
    }
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        Self::new(payload.name, payload.email)
    }
}

/// Request body of create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"), email)]
    pub email: String,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Check that both fields are present and `email` is well formed
    pub fn check(&self) -> Result<(), UserValidationError> {
        self.validate()
            .map_err(|errors| first_error(&errors, &self.email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_no_id() {
        let user = User::new("Test User", "test@example.com");

        assert!(user.id().is_none());
        assert_eq!(user.name(), "Test User");
        assert_eq!(user.email(), "test@example.com");
    }

    #[test]
    fn test_with_id() {
        let user = User::new("Test User", "test@example.com").with_id(UserId::new(3));

        assert_eq!(user.id(), Some(UserId::new(3)));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut user = User::new("Old Name", "old@example.com").with_id(UserId::new(1));

        user.apply(&UserPayload::new("Updated Name", "updated@example.com"));

        assert_eq!(user.id(), Some(UserId::new(1)));
        assert_eq!(user.name(), "Updated Name");
        assert_eq!(user.email(), "updated@example.com");
    }

    #[test]
    fn test_serialization_shape() {
        let user = User::new("Test User 1", "test1@example.com").with_id(UserId::new(1));

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Test User 1","email":"test1@example.com"}"#
        );
    }

    #[test]
    fn test_serialization_omits_missing_id() {
        let user = User::new("Test User", "test@example.com");

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("\"id\""));
    }

    #[test]
    fn test_deserialize_without_id() {
        let user: User =
            serde_json::from_str(r#"{"name":"Test User","email":"test@example.com"}"#).unwrap();
        assert!(user.id().is_none());
    }

    #[test]
    fn test_payload_ignores_client_id() {
        let payload: UserPayload =
            serde_json::from_str(r#"{"id":99,"name":"New User","email":"new@example.com"}"#)
                .unwrap();

        let user = User::from(payload);
        assert!(user.id().is_none());
        assert_eq!(user.name(), "New User");
    }

    #[test]
    fn test_payload_check_valid() {
        let payload = UserPayload::new("Test User", "test@example.com");
        assert!(payload.check().is_ok());
    }

    #[test]
    fn test_payload_check_blank_name() {
        let payload = UserPayload::new("   ", "test@example.com");
        assert_eq!(payload.check(), Err(UserValidationError::BlankName));
    }

    #[test]
    fn test_payload_check_blank_email() {
        let payload = UserPayload::new("Test User", "");
        assert_eq!(payload.check(), Err(UserValidationError::BlankEmail));
    }

    #[test]
    fn test_payload_check_invalid_email() {
        let payload = UserPayload::new("Test User", "not-an-email");
        assert_eq!(
            payload.check(),
            Err(UserValidationError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_user_id_display_and_value() {
        let id = UserId::from(42);
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
