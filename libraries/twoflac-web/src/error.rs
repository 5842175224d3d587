//! Input problems reported to the user as status banners

use thiserror::Error;
use twoflac_core::Platform;

/// Rejected user input. The `Display` text is the banner message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Masukkan URL terlebih dahulu.")]
    EmptyUrl,

    #[error("URL tidak valid. Pastikan URL sudah benar.")]
    InvalidUrl,

    #[error("URL harus dari YouTube, Spotify, atau SoundCloud.")]
    UnsupportedPlatform,

    /// The URL belongs to a different platform than the selected tab
    #[error("URL harus dari {}.", .0.display_name())]
    TabMismatch(Platform),

    #[error("Masukkan kata kunci pencarian terlebih dahulu.")]
    EmptyQuery,
}

impl InputError {
    /// Missing input is a warning, malformed input an error
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::EmptyQuery)
    }
}
