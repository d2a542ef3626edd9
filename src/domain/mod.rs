//! Domain layer - Core business entities and rules
//!
//! Everything here is independent of storage and transport. The only
//! outward-facing piece is `UserResponse`, the client-safe projection.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
