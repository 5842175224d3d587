//! 2FLAC Core
//!
//! Domain types, request validation and the music backend abstraction shared
//! by the 2FLAC server and presentation crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Platform`, request payloads and the response shapes
//!   returned by the conversion, details, download and search endpoints
//! - **Backend Trait**: `MusicBackend`, with `MockBackend` producing
//!   templated results after an artificial latency
//! - **Error Handling**: Unified `FlacError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use twoflac_core::{ConversionRequest, Platform};
//!
//! let request = ConversionRequest {
//!     url: Some("https://youtu.be/abc".to_string()),
//!     platform: Some("youtube".to_string()),
//!     format: None,
//! };
//! let valid = request.validate().unwrap();
//! assert_eq!(valid.format, "flac");
//!
//! assert_eq!(Platform::detect("https://youtu.be/abc"), Some(Platform::YouTube));
//! ```

#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod types;

pub use backend::{Latency, MockBackend, MusicBackend};
pub use error::{FlacError, Result};
pub use types::{
    ConversionRequest, ConversionResult, Credits, DetailsRequest, DownloadRequest,
    DownloadResult, Platform, SearchRequest, SearchResult, Track, TrackDetails,
    ValidConversion, ValidDetails, ValidDownload, ValidSearch,
};
