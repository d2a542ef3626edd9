//! User service - Business rules for user accounts.
//!
//! The service owns no state. It validates input, enforces email
//! uniqueness by probing the repository before insert, and otherwise
//! delegates. Repository errors are returned unchanged, there are no
//! retries, and cancellation is whatever dropping the future does to the
//! underlying query.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, DomainError, UpdateUser, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate and store a new user; the email must not be taken
    async fn register(&self, input: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Validate and replace a user's fields. A missing id is not an error.
    async fn update_user(&self, id: i64, input: UpdateUser) -> AppResult<User>;

    /// Delete user. A missing id is not an error.
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// List users, newest first
    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService using a repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: CreateUser) -> AppResult<User> {
        input.validate()?;

        // Not atomic with the insert; the table's unique constraint covers the race.
        match self.repo.get_by_email(&input.email).await {
            Ok(_) => return Err(DomainError::DuplicateEmail.into()),
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        let user = self.repo.create(input).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.get_by_id(id).await
    }

    async fn update_user(&self, id: i64, input: UpdateUser) -> AppResult<User> {
        input.validate()?;
        let user = self.repo.update(id, input).await?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn list_users(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        tracing::debug!(limit, offset, "Listing users");
        self.repo.list(limit, offset).await
    }
}
