//! Route configuration.

use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{admin_routes, health_routes, session_routes, user_routes};
use crate::middleware::admin_auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Registration and login (no auth)
        .merge(user_routes())
        .merge(session_routes())
        // Admin routes (Basic Auth)
        .nest(
            "/admin",
            admin_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                admin_auth_middleware,
            )),
        )
        .with_state(state)
}
