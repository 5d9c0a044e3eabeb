//! Request extractors.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has been deserialized and passed its [`Validate`] rules.
///
/// Rejects with 400 for malformed JSON, missing or mistyped fields, a wrong
/// content type, or any rule violation, so handlers only ever see valid
/// payloads.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateOrder>) -> AppResult<Json<()>> {
///     // input has passed every field rule here
///     Ok(Json(()))
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Path parameters whose parse failures answer with the JSON error body.
///
/// Axum's own [`Path`] rejection is plain text; this maps it onto
/// [`AppError::BadRequest`] so every 400 has the same shape.
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ValidatedPath(value))
    }
}
