//! Domain-level errors.
//!
//! These represent business rule violations. They know nothing about HTTP
//! or the database; the translation to transport status codes happens in
//! [`crate::errors`].

use thiserror::Error;

/// Closed set of failures with business meaning.
///
/// Callers branch on the variant, never on the message text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// No user with the requested identity
    #[error("user not found")]
    UserNotFound,

    /// Email is empty
    #[error("invalid email")]
    InvalidEmail,

    /// Password shorter than the minimum length
    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    /// Another user already owns this email
    #[error("email already exists")]
    DuplicateEmail,
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
