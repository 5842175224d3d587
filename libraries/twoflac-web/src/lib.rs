//! 2FLAC - Presentation
//!
//! Everything the 2FLAC landing page shows is produced here:
//! - View state for search paging (`ViewState`)
//! - Status banners with per-kind auto-dismiss
//! - Client-side generators for search, trending and conversion results
//! - HTML rendering of result cards, trending cards and the details panel
//! - The `Page` controller tying user actions to the above
//!
//! The presentation layer does not call the `/api/*` endpoints; every result
//! it displays is generated locally after a simulated delay.
//!
//! # Example
//!
//! ```rust
//! use twoflac_web::{Delays, Page};
//!
//! # tokio_test_block(async {
//! let mut page = Page::with_seed(Delays::none(), 7);
//! page.search("jazz").await;
//!
//! assert_eq!(page.results().len(), 9);
//! assert_eq!(page.results_count(), "9 dari 45 hasil ditemukan");
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(f);
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod generate;
pub mod page;
pub mod render;
pub mod song;
pub mod state;
pub mod status;
pub mod theme;

pub use error::InputError;
pub use page::{Delays, DownloadLink, Modal, Page};
pub use song::{FlacQuality, Song, SongDetails, Tab, TrendingItem};
pub use state::ViewState;
pub use status::{StatusBanner, StatusKind};
