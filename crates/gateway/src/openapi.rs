//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::admin_handler::{
    CreateCategoryRequest, CreateProductRequest, DashboardResponse, ProductResponse,
};
use crate::handlers::session_handler::SessionRequest;
use crate::handlers::user_handler::RegisterRequest;
use domain::{Category, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::register,
        crate::handlers::session_handler::create_session,
        crate::handlers::admin_handler::dashboard,
        crate::handlers::admin_handler::list_users,
        crate::handlers::admin_handler::list_categories,
        crate::handlers::admin_handler::create_category,
        crate::handlers::admin_handler::list_products,
        crate::handlers::admin_handler::create_product,
        crate::handlers::admin_handler::delete_product,
    ),
    components(
        schemas(
            RegisterRequest,
            SessionRequest,
            UserResponse,
            Category,
            CreateCategoryRequest,
            CreateProductRequest,
            ProductResponse,
            DashboardResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration"),
        (name = "Sessions", description = "Email and password login"),
        (name = "Admin", description = "Catalog administration (HTTP Basic Auth)"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}
