//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and repository calls. They depend on
//! the `UserRepository` trait, never on a storage technology.

mod user_service;

pub use user_service::{UserManager, UserService};
