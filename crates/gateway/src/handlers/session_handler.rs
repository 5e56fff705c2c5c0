//! Login handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::UserResponse;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Login request
#[derive(Deserialize, Validate, ToSchema)]
pub struct SessionRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    #[schema(example = "test@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 1024, message = "is too long (maximum is 1024 characters)"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Create session routes
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions", post(create_session))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/sessions",
    tag = "Sessions",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Authenticated identity", body = UserResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SessionRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .auth
        .authenticate_with_credentials(&req.email, &req.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    Ok(Json(UserResponse::from(user)))
}
