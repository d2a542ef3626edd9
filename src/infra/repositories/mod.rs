//! Repository layer - Data access abstraction
//!
//! `UserRepository` is the only storage contract the services see.
//! `UserStore` speaks SQL through SeaORM; `InMemoryUserStore` keeps rows
//! in process memory.

pub(crate) mod entities;
mod memory;
mod user_repository;

pub use memory::InMemoryUserStore;
pub use user_repository::{UserRepository, UserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
