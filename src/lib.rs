//! User API - account CRUD over HTTP
//!
//! A layered service: domain rules, a storage contract with PostgreSQL
//! and in-memory implementations, a use-case layer, and an Axum delivery
//! layer that maps errors onto HTTP status codes.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and validation
//! - **services**: Application use cases
//! - **infra**: Database connection and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared request/response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against PostgreSQL
//! cargo run -- serve
//!
//! # Start the server with a process-local store
//! cargo run -- serve --in-memory --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{DomainError, User};
pub use errors::{AppError, AppResult};
