/// Server error types
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use twoflac_core::FlacError;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Wrong HTTP verb; carries the `Allow` header value
    #[error("Method not allowed (allowed: {0})")]
    MethodNotAllowed(&'static str),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<FlacError> for ServerError {
    fn from(err: FlacError) -> Self {
        match err {
            FlacError::Validation(msg) => ServerError::BadRequest(msg),
            FlacError::Backend(msg) => ServerError::Internal(msg),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::MethodNotAllowed(allow) => {
                let body = Json(json!({ "error": "Method not allowed" }));
                return (
                    StatusCode::METHOD_NOT_ALLOWED,
                    [(header::ALLOW, HeaderValue::from_static(allow))],
                    body,
                )
                    .into_response();
            }
            ServerError::NotFound(ref path) => {
                tracing::debug!("No route for {}", path);
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
