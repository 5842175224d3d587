/// Search API routes
use super::extract::{Params, Payload};
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use twoflac_core::{SearchRequest, SearchResult};

pub const ALLOW: &str = "GET, POST";

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: usize,
    pub platform: &'static str,
}

/// GET /api/search?q=
pub async fn search_get(
    State(app_state): State<AppState>,
    Params(query): Params<SearchQuery>,
) -> Result<Json<SearchResponse>> {
    run(&app_state, SearchRequest::new(query.q)).await
}

/// POST /api/search
pub async fn search_post(
    State(app_state): State<AppState>,
    Payload(request): Payload<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    run(&app_state, request).await
}

async fn run(app_state: &AppState, request: SearchRequest) -> Result<Json<SearchResponse>> {
    let request = request.validate()?;
    let query = request.query.clone();
    tracing::info!("Searching for {:?}", query);

    let results = app_state.backend.search(request).await?;

    Ok(Json(SearchResponse {
        success: true,
        query,
        total: results.len(),
        results,
        platform: "all",
    }))
}
