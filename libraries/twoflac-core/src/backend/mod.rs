//! Music backend abstraction
//!
//! Handlers only talk to `MusicBackend`. The shipped implementation is
//! `MockBackend`, which waits for a configured latency and returns templated
//! data; a real extractor/transcoder would implement the same trait.

mod mock;

pub use mock::MockBackend;

use crate::error::Result;
use crate::types::{
    ConversionResult, DownloadResult, SearchResult, TrackDetails, ValidConversion, ValidDetails,
    ValidDownload, ValidSearch,
};
use async_trait::async_trait;
use std::time::Duration;

/// Operations behind the `/api/*` endpoints
#[async_trait]
pub trait MusicBackend: Send + Sync {
    /// Convert the track at a URL into the requested format
    async fn convert(&self, request: ValidConversion) -> Result<ConversionResult>;

    /// Fetch extended metadata for a track
    async fn details(&self, request: ValidDetails) -> Result<TrackDetails>;

    /// Prepare a converted file for download
    async fn download(&self, request: ValidDownload) -> Result<DownloadResult>;

    /// Search all platforms, results in ranking order
    async fn search(&self, request: ValidSearch) -> Result<Vec<SearchResult>>;
}

/// Artificial per-operation latency of `MockBackend`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub convert: Duration,
    pub details: Duration,
    pub download: Duration,
    pub search: Duration,
}

impl Latency {
    /// No delay at all, used by tests
    pub fn none() -> Self {
        Self {
            convert: Duration::ZERO,
            details: Duration::ZERO,
            download: Duration::ZERO,
            search: Duration::ZERO,
        }
    }

    pub fn from_millis(convert: u64, details: u64, download: u64, search: u64) -> Self {
        Self {
            convert: Duration::from_millis(convert),
            details: Duration::from_millis(details),
            download: Duration::from_millis(download),
            search: Duration::from_millis(search),
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(1000, 800, 1500, 800)
    }
}
