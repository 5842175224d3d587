use crate::error::ServerError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// Turn a handler panic into the generic 500 body
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ServerError::Internal(format!("handler panicked: {}", detail)).into_response()
}
