/// Router assembly
use crate::{
    api::{self, method_not_allowed, preflight},
    error::ServerError,
    middleware::{allow_headers_header, allow_methods_header, cors_layer, handle_panic},
    state::AppState,
};
use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use tower_http::{
    catch_panic::CatchPanicLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router.
///
/// Every `/api` endpoint answers `OPTIONS` with an empty 200 and any verb it
/// does not accept with 405 plus an exact `Allow` header. Paths outside the
/// API are served from `static_dir` when one is configured.
pub fn create_router(app_state: AppState, static_dir: Option<PathBuf>) -> Router {
    let api_routes = Router::new()
        .route(
            "/convert",
            post(api::convert::convert)
                .options(preflight)
                .fallback(method_not_allowed(api::convert::ALLOW)),
        )
        .route(
            "/details",
            get(api::details::details)
                .head(method_not_allowed(api::details::ALLOW))
                .options(preflight)
                .fallback(method_not_allowed(api::details::ALLOW)),
        )
        .route(
            "/download",
            post(api::download::download)
                .options(preflight)
                .fallback(method_not_allowed(api::download::ALLOW)),
        )
        .route(
            "/search",
            get(api::search::search_get)
                .post(api::search::search_post)
                .head(method_not_allowed(api::search::ALLOW))
                .options(preflight)
                .fallback(method_not_allowed(api::search::ALLOW)),
        )
        .route("/health", get(api::health::health))
        .fallback(api_not_found);

    let router = Router::new()
        .route("/", get(api::page::index))
        .nest("/api", api_routes);

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {:?}", dir);
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.fallback(api_not_found),
    };

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(cors_layer())
        .layer(allow_methods_header())
        .layer(allow_headers_header())
        .with_state(app_state)
}

async fn api_not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
