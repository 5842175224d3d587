//! Templated backend that performs no real work

use super::{Latency, MusicBackend};
use crate::error::Result;
use crate::types::{
    ConversionResult, Credits, DownloadResult, Platform, SearchResult, Track, TrackDetails,
    ValidConversion, ValidDetails, ValidDownload, ValidSearch,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, SecondsFormat, Utc};
use std::time::Duration;

const PLACEHOLDER_DOWNLOAD_URL: &str = "#";
const DETAILS_THUMBNAIL: &str = "https://via.placeholder.com/400x400/8a2be2/ffffff?text=Album+Art";

/// One row of the fixed search template
struct SearchTemplate {
    title_prefix: &'static str,
    title_suffix: &'static str,
    artist: &'static str,
    album: &'static str,
    duration: &'static str,
    platform: Platform,
    thumbnail: &'static str,
    url: &'static str,
    quality: &'static str,
}

const SEARCH_TEMPLATES: [SearchTemplate; 4] = [
    SearchTemplate {
        title_prefix: "",
        title_suffix: " - Official Audio",
        artist: "Popular Artist",
        album: "Latest Album",
        duration: "3:30",
        platform: Platform::YouTube,
        thumbnail: "https://i.ytimg.com/vi/sample1/hqdefault.jpg",
        url: "https://youtube.com/watch?v=sample1",
        quality: "FLAC • 24-bit",
    },
    SearchTemplate {
        title_prefix: "Best of ",
        title_suffix: "",
        artist: "Various Artists",
        album: "Compilation 2023",
        duration: "4:15",
        platform: Platform::Spotify,
        thumbnail: "https://i.scdn.co/image/sample2",
        url: "https://open.spotify.com/track/sample2",
        quality: "FLAC • Lossless",
    },
    SearchTemplate {
        title_prefix: "",
        title_suffix: " (Acoustic Version)",
        artist: "Indie Musician",
        album: "Unplugged Sessions",
        duration: "3:50",
        platform: Platform::SoundCloud,
        thumbnail: "https://i1.sndcdn.com/artworks-sample3.jpg",
        url: "https://soundcloud.com/user/sample3",
        quality: "FLAC • 96kHz",
    },
    SearchTemplate {
        title_prefix: "",
        title_suffix: " Remix",
        artist: "DJ Producer",
        album: "Dance Hits",
        duration: "5:20",
        platform: Platform::YouTube,
        thumbnail: "https://i.ytimg.com/vi/sample4/hqdefault.jpg",
        url: "https://youtube.com/watch?v=sample4",
        quality: "FLAC • 24-bit",
    },
];

/// Backend returning templated results after an artificial delay
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    latency: Latency,
}

impl MockBackend {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Latency {
        self.latency
    }

    async fn simulate(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Build a conversion result as of `now`
    pub fn conversion_result(request: &ValidConversion, now: DateTime<Utc>) -> ConversionResult {
        let expires_at = now + ChronoDuration::hours(24);

        ConversionResult {
            id: format!("conversion_{}", now.timestamp_millis()),
            title: format!("Music from {}", request.platform),
            artist: "Various Artists".to_string(),
            duration: "3:45".to_string(),
            format: request.format.to_uppercase(),
            quality: "Lossless".to_string(),
            platform: request.platform.clone(),
            download_url: PLACEHOLDER_DOWNLOAD_URL.to_string(),
            expires_at: expires_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Build the details record for an id/platform pair
    pub fn track_details(request: &ValidDetails) -> TrackDetails {
        TrackDetails {
            id: request.id.clone(),
            title: format!("Detailed Music Info {}", request.id),
            artist: "Featured Artist".to_string(),
            album: "Special Edition Album".to_string(),
            year: "2023".to_string(),
            duration: "4:20".to_string(),
            genre: vec!["Pop".into(), "Electronic".into(), "Alternative".into()],
            platform: request.platform.clone(),
            thumbnail: DETAILS_THUMBNAIL.to_string(),
            description: "This is a detailed description of the music track with full metadata information.".to_string(),
            bitrate: "1411 kbps".to_string(),
            sample_rate: "44.1 kHz".to_string(),
            bit_depth: "16-bit".to_string(),
            channels: "2 (Stereo)".to_string(),
            size: "25.4 MB".to_string(),
            tracks: vec![
                Track::new("Main Track", "4:20"),
                Track::new("Instrumental Version", "4:20"),
                Track::new("Acoustic Version", "4:05"),
                Track::new("Remix Version", "5:10"),
            ],
            credits: Credits {
                producer: "Professional Producer".to_string(),
                writer: "Song Writer".to_string(),
                label: "Record Label Inc.".to_string(),
            },
            release_date: "2023-10-15".to_string(),
            popularity: 85,
            available_qualities: vec![
                "16-bit/44.1kHz".into(),
                "24-bit/96kHz".into(),
                "24-bit/192kHz".into(),
            ],
        }
    }

    /// Build a download result as of `now`
    pub fn download_result(request: &ValidDownload, now: DateTime<Utc>) -> DownloadResult {
        let filename = request.filename.clone().unwrap_or_else(|| {
            format!("download_{}.{}", now.timestamp_millis(), request.format)
        });

        DownloadResult {
            download_url: PLACEHOLDER_DOWNLOAD_URL.to_string(),
            filename,
            format: request.format.to_uppercase(),
            size: "25.4 MB".to_string(),
            bitrate: "1411 kbps".to_string(),
            sample_rate: "44.1 kHz".to_string(),
            bit_depth: "16-bit".to_string(),
            expires_in: "24 hours".to_string(),
        }
    }

    /// Build the fixed four-result page for a query as of `now`
    pub fn search_results(request: &ValidSearch, now: DateTime<Utc>) -> Vec<SearchResult> {
        let stamp = now.timestamp_millis();

        SEARCH_TEMPLATES
            .iter()
            .enumerate()
            .map(|(index, template)| SearchResult {
                id: format!("result_{}_{}", index + 1, stamp),
                title: format!(
                    "{}{}{}",
                    template.title_prefix, request.query, template.title_suffix
                ),
                artist: template.artist.to_string(),
                album: template.album.to_string(),
                duration: template.duration.to_string(),
                platform: template.platform,
                thumbnail: template.thumbnail.to_string(),
                url: template.url.to_string(),
                quality: template.quality.to_string(),
            })
            .collect()
    }
}

#[async_trait]
impl MusicBackend for MockBackend {
    async fn convert(&self, request: ValidConversion) -> Result<ConversionResult> {
        tracing::debug!(url = %request.url, platform = %request.platform, "Simulating conversion");
        self.simulate(self.latency.convert).await;
        Ok(Self::conversion_result(&request, Utc::now()))
    }

    async fn details(&self, request: ValidDetails) -> Result<TrackDetails> {
        tracing::debug!(id = %request.id, platform = %request.platform, "Simulating details lookup");
        self.simulate(self.latency.details).await;
        Ok(Self::track_details(&request))
    }

    async fn download(&self, request: ValidDownload) -> Result<DownloadResult> {
        tracing::debug!(url = %request.url, format = %request.format, "Simulating download");
        self.simulate(self.latency.download).await;
        Ok(Self::download_result(&request, Utc::now()))
    }

    async fn search(&self, request: ValidSearch) -> Result<Vec<SearchResult>> {
        tracing::debug!(query = %request.query, "Simulating search");
        self.simulate(self.latency.search).await;
        Ok(Self::search_results(&request, Utc::now()))
    }
}
