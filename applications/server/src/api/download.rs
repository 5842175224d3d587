/// Download API route
use super::{extract::Payload, Envelope};
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use twoflac_core::{DownloadRequest, DownloadResult};

pub const ALLOW: &str = "POST";

/// POST /api/download
pub async fn download(
    State(app_state): State<AppState>,
    Payload(request): Payload<DownloadRequest>,
) -> Result<Json<Envelope<DownloadResult>>> {
    let request = request.validate()?;
    tracing::info!("Preparing {} download of {}", request.format, request.url);

    let result = app_state.backend.download(request).await?;

    Ok(Json(Envelope::with_message("File ready for download", result)))
}
