//! Infrastructure layer - External systems integration
//!
//! Connection management for the relational store and the repository
//! implementations built on top of it.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{InMemoryUserStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
