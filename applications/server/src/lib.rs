//! 2FLAC Server Library
//!
//! HTTP front end of 2FLAC: mock conversion, details, download and search
//! endpoints over `twoflac-core`, plus the landing page from `twoflac-web`.
//!
//! This library exposes the router and its parts for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
