//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::UserResponse;
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "User account CRUD over HTTP with Axum and SeaORM"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        health_handler::health,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            ErrorResponse,
            user_handler::UserRequest,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/users/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }

    #[test]
    fn test_user_schema_has_no_password() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
        let props = &doc["components"]["schemas"]["UserResponse"]["properties"];

        assert!(props.get("email").is_some());
        assert!(props.get("password").is_none());
    }
}
