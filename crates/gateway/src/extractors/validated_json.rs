//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;
use domain::ValidationErrors;

/// JSON extractor that automatically validates the payload.
///
/// Malformed JSON is a 400; shape-limit violations are field errors (422).
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        // Validate
        value.validate().map_err(|e| {
            let mut errors = ValidationErrors::new();
            for (field, field_errors) in e.field_errors() {
                for error in field_errors.iter() {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    errors.add(field.to_string(), message);
                }
            }
            AppError::Invalid(errors)
        })?;

        Ok(ValidatedJson(value))
    }
}
