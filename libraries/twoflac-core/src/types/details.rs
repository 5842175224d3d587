//! Track details lookup

use super::present;
use crate::error::{FlacError, Result};
use serde::{Deserialize, Serialize};

/// Query of `GET /api/details`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DetailsRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDetails {
    pub id: String,
    pub platform: String,
}

impl DetailsRequest {
    pub fn validate(self) -> Result<ValidDetails> {
        match (present(self.id), present(self.platform)) {
            (Some(id), Some(platform)) => Ok(ValidDetails { id, platform }),
            _ => Err(FlacError::validation("ID and platform are required")),
        }
    }
}

/// One entry of a release's track list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub duration: String,
}

impl Track {
    pub fn new(title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credits {
    pub producer: String,
    pub writer: String,
    pub label: String,
}

/// Extended metadata for a single track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetails {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub duration: String,
    pub genre: Vec<String>,
    pub platform: String,
    pub thumbnail: String,
    pub description: String,
    pub bitrate: String,
    pub sample_rate: String,
    pub bit_depth: String,
    pub channels: String,
    pub size: String,
    pub tracks: Vec<Track>,
    pub credits: Credits,
    pub release_date: String,
    pub popularity: u8,
    pub available_qualities: Vec<String>,
}
