//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::{DomainError, DomainResult};
use crate::config::MIN_PASSWORD_LENGTH;

/// Business rule shared by every shape of user data.
///
/// Only emptiness is checked for the email; format is the delivery layer's
/// concern. Password length is counted in characters.
fn validate_credentials(email: &str, password: &str) -> DomainResult<()> {
    if email.is_empty() {
        return Err(DomainError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::PasswordTooShort);
    }
    Ok(())
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    /// Stored as given; hashing is not performed.
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check the entity against the account rules.
    pub fn validate(&self) -> DomainResult<()> {
        validate_credentials(&self.email, &self.password)
    }

    /// Build the entity a store reports for an update that matched no row.
    ///
    /// Nothing was persisted, so both timestamps carry the time of the attempt.
    pub fn detached(id: i64, changes: UpdateUser, at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: changes.email,
            name: changes.name,
            password: changes.password,
            created_at: at,
            updated_at: at,
        }
    }
}

/// Data needed to register a user. Storage assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl CreateUser {
    pub fn validate(&self) -> DomainResult<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// Full replacement of a user's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl UpdateUser {
    pub fn validate(&self) -> DomainResult<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str, password: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            name: "Test User".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert_eq!(input("a@b.com", "longpassword").validate(), Ok(()));
    }

    #[test]
    fn test_empty_email_rejected() {
        assert_eq!(
            input("", "longpassword").validate(),
            Err(DomainError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_format_not_checked() {
        // Only emptiness is a domain rule
        assert_eq!(input("not-an-email", "longpassword").validate(), Ok(()));
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(
            input("a@b.com", "short").validate(),
            Err(DomainError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_minimum_length() {
        // Exactly 8 characters should work
        assert_eq!(input("a@b.com", "12345678").validate(), Ok(()));
        assert_eq!(
            input("a@b.com", "1234567").validate(),
            Err(DomainError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 characters, 16 bytes
        assert_eq!(input("a@b.com", "пароль12").validate(), Ok(()));
    }

    #[test]
    fn test_email_checked_before_password() {
        assert_eq!(input("", "x").validate(), Err(DomainError::InvalidEmail));
    }

    #[test]
    fn test_entity_and_update_share_rule() {
        let now = Utc::now();
        let changes = UpdateUser {
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            password: "short".to_string(),
        };
        assert_eq!(changes.validate(), Err(DomainError::PasswordTooShort));

        let user = User::detached(7, changes, now);
        assert_eq!(user.validate(), Err(DomainError::PasswordTooShort));
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_never_serialized() {
        let now = Utc::now();
        let user = User {
            id: 1,
            email: "a@b.com".to_string(),
            name: "A".to_string(),
            password: "longpassword".to_string(),
            created_at: now,
            updated_at: now,
        };

        let entity_json = serde_json::to_value(&user).unwrap();
        assert!(entity_json.get("password").is_none());

        let response_json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(response_json.get("password").is_none());
        assert_eq!(response_json["email"], "a@b.com");
    }
}
