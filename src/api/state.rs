//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::{Database, InMemoryUserStore, UserRepository, UserStore};
use crate::services::{UserManager, UserService};

/// Application state containing the services handlers call into.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create new application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Wire the service to any repository implementation.
    pub fn with_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(repo)))
    }

    /// Wire the service to the PostgreSQL store.
    pub fn from_database(database: Database) -> Self {
        Self::with_repository(Arc::new(UserStore::new(database.into_connection())))
    }

    /// Wire the service to a fresh process-local store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryUserStore::new()))
    }
}
