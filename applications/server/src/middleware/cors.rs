use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Request headers a browser may send cross-origin
pub const ALLOWED_HEADERS: [&str; 9] = [
    "x-csrf-token",
    "x-requested-with",
    "accept",
    "accept-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "x-api-version",
];

pub const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::DELETE,
    Method::POST,
    Method::PUT,
];

const ALLOW_METHODS_VALUE: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
const ALLOW_HEADERS_VALUE: &str = "x-csrf-token,x-requested-with,accept,accept-version,\
content-length,content-md5,content-type,date,x-api-version";

/// Wildcard-origin CORS for every route.
///
/// `OPTIONS` requests are answered by the layer itself with an empty 200.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS.to_vec())
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static).to_vec())
}

/// `Access-Control-Allow-Methods` on responses the CORS layer leaves bare
pub fn allow_methods_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS_VALUE),
    )
}

/// `Access-Control-Allow-Headers` on responses the CORS layer leaves bare
pub fn allow_headers_header() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS_VALUE),
    )
}
