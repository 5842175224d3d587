//! Items shown on the page

use serde::{Deserialize, Serialize};
use twoflac_core::{Platform, Track};

/// A card in the results grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Option<String>,
    pub platform: Platform,
    pub quality: Option<String>,
    pub thumbnail: Option<String>,
    pub year: Option<String>,
    pub genre: Option<Vec<String>>,
}

/// A card in the trending grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub rank: usize,
    pub title: String,
    pub artist: String,
    pub plays: String,
    pub platform: Platform,
    pub thumbnail: String,
}

impl TrendingItem {
    /// The song opened when a trending card is clicked
    pub fn to_song(&self) -> Song {
        Song {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
            album: None,
            duration: None,
            platform: self.platform,
            quality: None,
            thumbnail: Some(self.thumbnail.clone()),
            year: None,
            genre: None,
        }
    }
}

/// Extended fields shown in the details modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongDetails {
    pub song: Song,
    pub album: String,
    pub year: String,
    pub genre: Vec<String>,
    pub duration: String,
    pub bitrate: String,
    pub sample_rate: String,
    pub bit_depth: String,
    pub size: String,
    pub description: String,
    pub tracks: Vec<Track>,
}

/// Quality chosen in the details modal before downloading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlacQuality {
    #[default]
    #[serde(rename = "16bit")]
    Cd,
    #[serde(rename = "24bit")]
    HiRes,
    #[serde(rename = "24bit-hr")]
    StudioMaster,
}

impl FlacQuality {
    pub const ALL: [FlacQuality; 3] = [FlacQuality::Cd, FlacQuality::HiRes, FlacQuality::StudioMaster];

    /// Key used in markup and download filenames
    pub fn key(&self) -> &'static str {
        match self {
            FlacQuality::Cd => "16bit",
            FlacQuality::HiRes => "24bit",
            FlacQuality::StudioMaster => "24bit-hr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlacQuality::Cd => "16-bit/44.1kHz",
            FlacQuality::HiRes => "24-bit/96kHz",
            FlacQuality::StudioMaster => "24-bit/192kHz",
        }
    }

    /// Button caption in the quality picker
    pub fn button_label(&self) -> &'static str {
        match self {
            FlacQuality::Cd => "16-bit / 44.1kHz",
            FlacQuality::HiRes => "24-bit / 96kHz",
            FlacQuality::StudioMaster => "24-bit / 192kHz",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.key() == key)
    }
}

/// Platform filter tab above the URL input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    All,
    Only(Platform),
}

impl Tab {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Tab::All => "Tempel URL YouTube, Spotify, atau SoundCloud di sini...",
            Tab::Only(Platform::YouTube) => {
                "https://www.youtube.com/watch?v=... atau https://youtu.be/..."
            }
            Tab::Only(Platform::Spotify) => {
                "https://open.spotify.com/track/... atau https://open.spotify.com/album/..."
            }
            Tab::Only(Platform::SoundCloud) => "https://soundcloud.com/...",
        }
    }

    /// Whether a detected platform is acceptable under this tab
    pub fn accepts(&self, platform: Platform) -> bool {
        match self {
            Tab::All => true,
            Tab::Only(selected) => *selected == platform,
        }
    }
}
