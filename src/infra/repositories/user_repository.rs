//! User repository contract and its PostgreSQL implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{CreateUser, DomainError, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage capability the service layer depends on.
///
/// Lookups report absence as `DomainError::UserNotFound`, distinct from
/// any other failure. Update and delete do not treat a missing id as an
/// error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; storage assigns id, created_at and updated_at
    async fn create(&self, user: CreateUser) -> AppResult<User>;

    /// Find user by ID
    async fn get_by_id(&self, id: i64) -> AppResult<User>;

    /// Find user by email address
    async fn get_by_email(&self, email: &str) -> AppResult<User>;

    /// Replace mutable fields and refresh updated_at
    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User>;

    /// Remove user by ID
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Page through users, newest-created first
    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;
}

const MAX_BIND: u64 = i64::MAX as u64;

/// Map a unique-constraint violation on `email` to its domain meaning.
fn map_write_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateEmail.into(),
        _ => AppError::from(err),
    }
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            email: Set(user.email),
            name: Set(user.name),
            password: Set(user.password),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_err)?;
        tracing::debug!(user_id = model.id, "Inserted user row");
        Ok(User::from(model))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(DomainError::UserNotFound.into())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(DomainError::UserNotFound.into())
    }

    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let now = Utc::now();
        let patch = ActiveModel {
            email: Set(changes.email.clone()),
            name: Set(changes.name.clone()),
            password: Set(changes.password.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        // Single UPDATE ... RETURNING; a concurrent delete just matches no row
        let updated = UserEntity::update_many()
            .set(patch)
            .filter(user::Column::Id.eq(id))
            .exec_with_returning(&self.db)
            .await
            .map_err(map_write_err)?;

        match updated.into_iter().next() {
            Some(model) => Ok(User::from(model)),
            None => {
                tracing::debug!(user_id = id, "Update matched no row");
                Ok(User::detached(id, changes, now))
            }
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = id, "Delete matched no row");
        }

        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_desc(user::Column::CreatedAt)
            .order_by_desc(user::Column::Id)
            // Postgres binds these as BIGINT
            .limit(limit.min(MAX_BIND))
            .offset(offset.min(MAX_BIND))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
