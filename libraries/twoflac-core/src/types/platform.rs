//! Source platforms a track can come from

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A music platform recognised by 2FLAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[serde(rename = "youtube")]
    YouTube,
    Spotify,
    #[serde(rename = "soundcloud")]
    SoundCloud,
}

struct UrlPatterns {
    youtube: Regex,
    spotify: Regex,
    soundcloud: Regex,
}

fn url_patterns() -> &'static UrlPatterns {
    static PATTERNS: OnceLock<UrlPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| UrlPatterns {
        youtube: Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$")
            .expect("valid youtube pattern"),
        spotify: Regex::new(r"^(https?://)?open\.spotify\.com/(track|album|playlist)/.+$")
            .expect("valid spotify pattern"),
        soundcloud: Regex::new(r"^(https?://)?(www\.)?soundcloud\.com/.+$")
            .expect("valid soundcloud pattern"),
    })
}

impl Platform {
    /// All platforms, in detection order
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::Spotify, Platform::SoundCloud];

    /// Wire identifier (`youtube`, `spotify`, `soundcloud`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Spotify => "spotify",
            Platform::SoundCloud => "soundcloud",
        }
    }

    /// Identifier with the first letter capitalised, as shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "Youtube",
            Platform::Spotify => "Spotify",
            Platform::SoundCloud => "Soundcloud",
        }
    }

    /// Recognise the platform a URL points at by its shape.
    ///
    /// YouTube is checked first, then Spotify (track, album and playlist
    /// links only), then SoundCloud.
    pub fn detect(url: &str) -> Option<Platform> {
        let patterns = url_patterns();
        if patterns.youtube.is_match(url) {
            Some(Platform::YouTube)
        } else if patterns.spotify.is_match(url) {
            Some(Platform::Spotify)
        } else if patterns.soundcloud.is_match(url) {
            Some(Platform::SoundCloud)
        } else {
            None
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::YouTube),
            "spotify" => Ok(Platform::Spotify),
            "soundcloud" => Ok(Platform::SoundCloud),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}
