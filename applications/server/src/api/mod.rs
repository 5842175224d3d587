/// API route modules
pub mod convert;
pub mod details;
pub mod download;
pub mod extract;
pub mod health;
pub mod page;
pub mod search;

use crate::error::ServerError;
use axum::http::StatusCode;
use serde::Serialize;
use std::future::{ready, Ready};

/// `{success, message?, data}` wrapper shared by the mock endpoints
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }
}

/// OPTIONS on any endpoint: empty 200
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback handler for verbs an endpoint does not accept
pub fn method_not_allowed(
    allow: &'static str,
) -> impl Fn() -> Ready<ServerError> + Clone + Send + Sync + 'static {
    move || ready(ServerError::MethodNotAllowed(allow))
}

/// Route table printed by `twoflac-server routes`
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("/api/convert", convert::ALLOW, "Convert a track URL to FLAC"),
    ("/api/details", details::ALLOW, "Extended track metadata"),
    ("/api/download", download::ALLOW, "Prepare a converted file"),
    ("/api/search", search::ALLOW, "Search all platforms"),
    ("/api/health", "GET", "Health check"),
    ("/", "GET", "Landing page"),
];
