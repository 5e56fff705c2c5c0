//! HTTP Basic Auth middleware for admin routes.

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
        HeaderMap, HeaderValue, Request,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose, Engine as _};
use tracing::warn;

use common::AppError;
use domain::ADMIN_REALM;

use crate::state::AppState;

/// Admit the request only when its Basic credentials match the admin pair.
///
/// Missing or malformed headers are rejected the same way as wrong
/// credentials: 401 with a challenge for the admin realm.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let authorized = basic_credentials(request.headers())
        .map(|(username, password)| state.admin_gate.authenticate_request(&username, &password))
        .unwrap_or(false);

    if !authorized {
        warn!(path = %request.uri().path(), "Admin authentication failed");
        return challenge();
    }

    next.run(request).await
}

/// Decode `Authorization: Basic base64(username:password)`.
///
/// The scheme name matches in any case. The password may itself contain `:`;
/// only the first one separates.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = header.trim_start().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = general_purpose::STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let mut parts = decoded.splitn(2, ':');
    let username = parts.next()?.to_string();
    let password = parts.next()?.to_string();
    Some((username, password))
}

fn challenge() -> Response {
    let mut response = AppError::Unauthorized.into_response();
    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{}\"", ADMIN_REALM)) {
        response.headers_mut().insert(WWW_AUTHENTICATE, value);
    }
    response
}
