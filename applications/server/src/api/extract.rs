/// Lenient request extractors
use crate::error::ServerError;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON body parsed regardless of `Content-Type`.
///
/// A blank body yields `T::default()`; anything else must be valid JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServerError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Payload)
            .map_err(|e| {
                tracing::debug!("Rejected request body: {}", e);
                ServerError::BadRequest("Invalid JSON body".to_string())
            })
    }
}

/// Query string with rejections rendered as `{"error": ...}`
#[derive(Debug, Clone, Copy, Default)]
pub struct Params<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Params<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        axum::extract::Query::<T>::from_request_parts(parts, state)
            .await
            .map(|axum::extract::Query(value)| Params(value))
            .map_err(|e| ServerError::BadRequest(e.body_text()))
    }
}
