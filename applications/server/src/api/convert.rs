/// Conversion API route
use super::{extract::Payload, Envelope};
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use twoflac_core::{ConversionRequest, ConversionResult};

pub const ALLOW: &str = "POST";

/// POST /api/convert
pub async fn convert(
    State(app_state): State<AppState>,
    Payload(request): Payload<ConversionRequest>,
) -> Result<Json<Envelope<ConversionResult>>> {
    let request = request.validate()?;
    tracing::info!("Converting {} track {}", request.platform, request.url);

    let result = app_state.backend.convert(request).await?;

    Ok(Json(Envelope::with_message("Conversion successful", result)))
}
