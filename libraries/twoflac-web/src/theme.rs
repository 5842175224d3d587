//! Platform colors and icons

use twoflac_core::Platform;

/// Brand color used when no platform is known
pub const DEFAULT_COLOR: &str = "#8a2be2";
pub const DEFAULT_ICON: &str = "fas fa-music";

pub fn platform_color(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::YouTube) => "#FF0000",
        Some(Platform::Spotify) => "#1DB954",
        Some(Platform::SoundCloud) => "#FF5500",
        None => DEFAULT_COLOR,
    }
}

pub fn platform_icon(platform: Option<Platform>) -> &'static str {
    match platform {
        Some(Platform::YouTube) => "fab fa-youtube",
        Some(Platform::Spotify) => "fab fa-spotify",
        Some(Platform::SoundCloud) => "fab fa-soundcloud",
        None => DEFAULT_ICON,
    }
}

/// Color without the leading `#`, as placeholder image URLs expect it
pub fn color_hex(platform: Platform) -> &'static str {
    platform_color(Some(platform)).trim_start_matches('#')
}
