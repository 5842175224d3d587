//! Search requests and results

use super::{loose_text, present};
use crate::error::{FlacError, Result};
use crate::types::Platform;
use serde::{Deserialize, Serialize};

/// Search input, taken from `?q=` on GET or `{"query": ...}` on POST
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "loose_text")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSearch {
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: Option<String>) -> Self {
        Self { query }
    }

    pub fn validate(self) -> Result<ValidSearch> {
        present(self.query)
            .map(|query| ValidSearch { query })
            .ok_or_else(|| FlacError::validation("Search query is required"))
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: String,
    pub platform: Platform,
    pub thumbnail: String,
    pub url: String,
    pub quality: String,
}
