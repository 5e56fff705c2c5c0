//! Registration handler.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{Registration, UserResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Registration request. Presence and confirmation rules are checked by the
/// credential store so that every field error is reported together.
#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "test@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "Test")]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "User")]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "is too long (maximum is 1024 characters)"))]
    #[schema(example = "password123")]
    pub password: String,
    #[serde(default)]
    #[schema(example = "password123")]
    pub password_confirmation: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Registration {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password: req.password,
            password_confirmation: req.password_confirmation,
        }
    }
}

/// Create registration routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register))
}

/// Register a new identity
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Identity registered", body = UserResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Field errors")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.users.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
