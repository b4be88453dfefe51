use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decodes the request body as JSON regardless of its Content-Type,
/// rejecting with `ApiError::MalformedBody` on any shape mismatch.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        let value = serde_json::from_slice::<T>(&bytes)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;

        Ok(JsonBody(value))
    }
}
