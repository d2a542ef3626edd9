//! Process-local user store for development and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{CreateUser, DomainError, UpdateUser, User};
use crate::errors::AppResult;

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// In-memory implementation of UserRepository.
///
/// Ids start at 1 and are never reused. Emails are unique, mirroring the
/// table constraint of the SQL store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: CreateUser) -> AppResult<User> {
        let mut table = self.table.write().await;

        if table.email_taken(&user.email, None) {
            return Err(DomainError::DuplicateEmail.into());
        }

        table.last_id += 1;
        let now = Utc::now();
        let stored = User {
            id: table.last_id,
            email: user.email,
            name: user.name,
            password: user.password,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(stored.id, stored.clone());

        tracing::debug!(user_id = stored.id, "Stored user in memory");
        Ok(stored)
    }

    async fn get_by_id(&self, id: i64) -> AppResult<User> {
        let table = self.table.read().await;
        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(DomainError::UserNotFound.into())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<User> {
        let table = self.table.read().await;
        table
            .rows
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(DomainError::UserNotFound.into())
    }

    async fn update(&self, id: i64, changes: UpdateUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        let now = Utc::now();

        // A missing row is echoed back whatever the email, as the SQL store does
        if !table.rows.contains_key(&id) {
            return Ok(User::detached(id, changes, now));
        }
        if table.email_taken(&changes.email, Some(id)) {
            return Err(DomainError::DuplicateEmail.into());
        }

        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(User::detached(id, changes, now));
        };

        existing.email = changes.email;
        existing.name = changes.name;
        existing.password = changes.password;
        existing.updated_at = now;

        Ok(existing.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let table = self.table.read().await;
        let mut users: Vec<User> = table.rows.values().cloned().collect();

        // Newest first; id breaks ties between equal timestamps
        users.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(users
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }
}
