use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

mod conversion;
mod details;
mod download;
mod platform;
mod search;

pub use conversion::{ConversionRequest, ConversionResult, ValidConversion};
pub use details::{Credits, DetailsRequest, Track, TrackDetails, ValidDetails};
pub use download::{DownloadRequest, DownloadResult, ValidDownload};
pub use platform::Platform;
pub use search::{SearchRequest, SearchResult, ValidSearch};

/// Treat empty strings the same as absent fields
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Read a body field that may hold any JSON value.
///
/// Numbers and `true` become their text, `false`, `0`, `null` and `""` read
/// as absent, and objects or arrays become a marker that is present but is
/// never a URL.
pub(crate) fn loose_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Number(f64),
        Flag(bool),
        Other(IgnoredAny),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(text)) => present(Some(text)),
        Some(Loose::Number(n)) if n.abs() > 0.0 => Some(n.to_string()),
        Some(Loose::Flag(true)) => Some("true".to_string()),
        Some(Loose::Other(_)) => Some("[object Object]".to_string()),
        _ => None,
    })
}
