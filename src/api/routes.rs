//! Application route configuration.

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{health, user_routes};
use super::middleware::cors_layer;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{Config, API_PREFIX};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(&format!("{API_PREFIX}/users"), user_routes())
        // Global middleware; the timeout answers 408 and drops the handler future
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
