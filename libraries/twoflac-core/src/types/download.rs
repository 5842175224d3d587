//! Download preparation

use super::{loose_text, present};
use crate::error::{FlacError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/download`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DownloadRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub url: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDownload {
    pub url: String,
    pub format: String,
    /// `None` means the backend picks a timestamped name
    pub filename: Option<String>,
}

impl DownloadRequest {
    pub fn validate(self) -> Result<ValidDownload> {
        let url = present(self.url).ok_or_else(|| FlacError::validation("URL is required"))?;

        Ok(ValidDownload {
            url,
            format: present(self.format).unwrap_or_else(|| "flac".to_string()),
            filename: present(self.filename),
        })
    }
}

/// A file prepared for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResult {
    pub download_url: String,
    pub filename: String,
    pub format: String,
    pub size: String,
    pub bitrate: String,
    pub sample_rate: String,
    pub bit_depth: String,
    pub expires_in: String,
}
