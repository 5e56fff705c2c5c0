//! Admin handlers. Every route here sits behind the Basic Auth middleware.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Category, NewCategory, NewProduct, Product, UserResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Totals for the admin landing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub product_count: u64,
    pub category_count: u64,
    pub user_count: u64,
}

/// Category creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "Evergreens")]
    pub name: Option<String>,
}

/// Product creation request. Fields are optional so that omissions are
/// reported as field errors.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "Giant Tea")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Whole cents, as a number or numeric string
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 6499)]
    pub price_cents: Option<serde_json::Value>,
    #[serde(default)]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
}

/// Non-numeric prices become absent so the price check reports them.
fn parse_cents(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            description: req.description,
            price_cents: req.price_cents.as_ref().and_then(parse_cents),
            quantity: req.quantity,
            category_id: req.category_id,
        }
    }
}

/// Product as listed on the admin surface
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    /// e.g. "$64.99"
    pub price: String,
    pub quantity: i32,
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            price: product.display_price(),
            id: product.id,
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            quantity: product.quantity,
            category_id: product.category_id,
            created_at: product.created_at,
        }
    }
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/users", get(list_users))
        .route("/categories", get(list_categories).post(create_category))
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", delete(delete_product))
}

/// Catalog and identity totals
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "Totals", body = DashboardResponse),
        (status = 401, description = "Admin credentials required")
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let counts = state.catalog.counts().await?;
    let user_count = state.users.count_users().await?;

    Ok(Json(DashboardResponse {
        product_count: counts.products,
        category_count: counts.categories,
        user_count,
    }))
}

/// List registered identities
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "All identities", body = Vec<UserResponse>),
        (status = 401, description = "Admin credentials required")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// List categories
#[utoipa::path(
    get,
    path = "/admin/categories",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 401, description = "Admin credentials required")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.list_categories().await?))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/admin/categories",
    tag = "Admin",
    security(("basic_auth" = [])),
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 401, description = "Admin credentials required"),
        (status = 422, description = "Field errors")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state
        .catalog
        .create_category(NewCategory { name: req.name })
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List products, newest first
#[utoipa::path(
    get,
    path = "/admin/products",
    tag = "Admin",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "All products", body = Vec<ProductResponse>),
        (status = 401, description = "Admin credentials required")
    )
)]
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let products = state.catalog.list_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/admin/products",
    tag = "Admin",
    security(("basic_auth" = [])),
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 401, description = "Admin credentials required"),
        (status = 422, description = "Field errors")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let product = state.catalog.create_product(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    tag = "Admin",
    security(("basic_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "Admin credentials required"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_cents_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_cents(&json!(1250)), Some(1250));
        assert_eq!(parse_cents(&json!(" 1250 ")), Some(1250));
        assert_eq!(parse_cents(&json!("twelve")), None);
        assert_eq!(parse_cents(&json!(12.5)), None);
        assert_eq!(parse_cents(&json!(null)), None);
    }

    #[test]
    fn test_product_response_formats_price() {
        let response = ProductResponse::from(Product {
            id: Uuid::new_v4(),
            name: "Giant Tea".to_string(),
            description: None,
            price_cents: 6499,
            quantity: 10,
            category_id: Uuid::new_v4(),
            created_at: Utc::now(),
        });
        assert_eq!(response.price, "$64.99");
    }
}
