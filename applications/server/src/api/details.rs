/// Track details API route
use super::{extract::Params, Envelope};
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use twoflac_core::{DetailsRequest, TrackDetails};

pub const ALLOW: &str = "GET";

/// GET /api/details?id=&platform=
pub async fn details(
    State(app_state): State<AppState>,
    Params(request): Params<DetailsRequest>,
) -> Result<Json<Envelope<TrackDetails>>> {
    let request = request.validate()?;
    let details = app_state.backend.details(request).await?;

    Ok(Json(Envelope::ok(details)))
}
