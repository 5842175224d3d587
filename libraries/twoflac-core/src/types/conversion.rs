//! Conversion request and result

use super::{loose_text, present};
use crate::error::{FlacError, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/convert`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConversionRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub platform: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// A conversion request whose required fields are present and whose URL parses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidConversion {
    pub url: String,
    pub platform: String,
    pub format: String,
}

impl ConversionRequest {
    pub fn validate(self) -> Result<ValidConversion> {
        let (Some(url), Some(platform)) = (present(self.url), present(self.platform)) else {
            return Err(FlacError::validation("URL and platform are required"));
        };

        if url::Url::parse(&url).is_err() {
            return Err(FlacError::validation("Invalid URL"));
        }

        Ok(ValidConversion {
            url,
            platform,
            format: present(self.format).unwrap_or_else(|| "flac".to_string()),
        })
    }
}

/// Outcome of a (simulated) conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
    pub format: String,
    pub quality: String,
    pub platform: String,
    pub download_url: String,
    /// RFC 3339 timestamp 24 hours after the conversion. Informational only.
    pub expires_at: String,
}
