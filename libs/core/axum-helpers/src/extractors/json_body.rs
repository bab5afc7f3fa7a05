//! JSON extractor whose rejection is a JSON error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`], but renders deserialization failures through
/// [`AppError::BadRequest`] so the client always receives a JSON error body.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateProduct>) { /* ... */ }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()).into_response())?;

        Ok(JsonBody(data))
    }
}
