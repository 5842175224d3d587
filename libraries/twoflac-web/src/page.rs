//! Page controller
//!
//! `Page` owns everything the landing page displays and exposes one async
//! method per user action. Each action waits on a simulated delay, then
//! updates the results, the trending chart, the details modal or the status
//! banner. Nothing here performs network I/O.

use crate::error::InputError;
use crate::generate;
use crate::song::{FlacQuality, Song, SongDetails, Tab, TrendingItem};
use crate::state::{ViewState, TOTAL_RESULTS};
use crate::status::{StatusBanner, StatusKind};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use twoflac_core::Platform;

/// Query searched when the page first loads
pub const INITIAL_QUERY: &str = "musik terbaru";
/// Trending window loaded when the page first loads
pub const INITIAL_TRENDING_WINDOW: &str = "week";

const WELCOME: &str =
    "Selamat datang di 2FLAC! Cari atau konversi musik favorit Anda ke format FLAC.";

/// Simulated latency of each page action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub convert: Duration,
    pub search: Duration,
    pub trending: Duration,
    pub details: Duration,
    pub download: Duration,
    /// Pause between a finished download and the modal closing
    pub close_after_download: Duration,
}

impl Delays {
    pub fn none() -> Self {
        Self {
            convert: Duration::ZERO,
            search: Duration::ZERO,
            trending: Duration::ZERO,
            details: Duration::ZERO,
            download: Duration::ZERO,
            close_after_download: Duration::ZERO,
        }
    }
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            convert: Duration::from_millis(1500),
            search: Duration::from_millis(1200),
            trending: Duration::from_millis(800),
            details: Duration::from_millis(800),
            download: Duration::from_millis(1500),
            close_after_download: Duration::from_millis(1000),
        }
    }
}

/// State of the details modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Loading,
    Open(SongDetails),
}

/// The placeholder anchor "clicked" at the end of a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

pub struct Page {
    delays: Delays,
    rng: StdRng,
    state: ViewState,
    status: Option<StatusBanner>,
    tab: Tab,
    results: Vec<Song>,
    results_count: String,
    load_more_visible: bool,
    trending: Vec<TrendingItem>,
    trending_window: String,
    modal: Modal,
    quality: FlacQuality,
    downloads: Vec<DownloadLink>,
}

impl Page {
    pub fn new(delays: Delays) -> Self {
        Self::with_rng(delays, StdRng::from_entropy())
    }

    /// Deterministic platform assignment, for tests
    pub fn with_seed(delays: Delays, seed: u64) -> Self {
        Self::with_rng(delays, StdRng::seed_from_u64(seed))
    }

    fn with_rng(delays: Delays, rng: StdRng) -> Self {
        Self {
            delays,
            rng,
            state: ViewState::default(),
            status: None,
            tab: Tab::default(),
            results: Vec::new(),
            results_count: String::new(),
            load_more_visible: false,
            trending: Vec::new(),
            trending_window: INITIAL_TRENDING_WINDOW.to_string(),
            modal: Modal::Closed,
            quality: FlacQuality::default(),
            downloads: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The banner, unless it has auto-dismissed
    pub fn status(&self) -> Option<&StatusBanner> {
        self.status.as_ref().filter(|banner| banner.is_visible())
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn url_placeholder(&self) -> &'static str {
        self.tab.placeholder()
    }

    pub fn results(&self) -> &[Song] {
        &self.results
    }

    pub fn results_count(&self) -> &str {
        &self.results_count
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn trending(&self) -> &[TrendingItem] {
        &self.trending
    }

    pub fn trending_window(&self) -> &str {
        &self.trending_window
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn quality(&self) -> FlacQuality {
        self.quality
    }

    /// Download links clicked so far, oldest first
    pub fn downloads(&self) -> &[DownloadLink] {
        &self.downloads
    }

    fn show_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        let banner = StatusBanner::new(message, kind);
        tracing::debug!(kind = ?banner.kind, message = %banner.message, "Status");
        self.status = Some(banner);
    }

    fn reject(&mut self, error: InputError) {
        let kind = if error.is_warning() {
            StatusKind::Warning
        } else {
            StatusKind::Error
        };
        self.show_status(error.to_string(), kind);
    }

    fn show_loading(&mut self) {
        self.state.is_loading = true;
    }

    fn hide_loading(&mut self) {
        self.state.is_loading = false;
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn stamp() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn select_quality(&mut self, quality: FlacQuality) {
        self.quality = quality;
    }

    /// Check a URL against the selected tab, returning its platform
    pub fn check_url(&self, url: &str) -> Result<Platform, InputError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(InputError::EmptyUrl);
        }
        if url::Url::parse(url).is_err() {
            return Err(InputError::InvalidUrl);
        }
        let platform = Platform::detect(url).ok_or(InputError::UnsupportedPlatform)?;
        match self.tab {
            Tab::Only(selected) if !self.tab.accepts(platform) => {
                Err(InputError::TabMismatch(selected))
            }
            _ => Ok(platform),
        }
    }

    /// Convert a pasted URL into a single result card
    pub async fn convert(&mut self, url: &str) {
        let platform = match self.check_url(url) {
            Ok(platform) => platform,
            Err(error) => return self.reject(error),
        };

        self.show_loading();
        Self::pause(self.delays.convert).await;

        self.results = vec![generate::converted_song(platform, Self::stamp())];
        self.results_count = "1 hasil ditemukan".to_string();
        self.load_more_visible = false;
        self.show_status(
            format!("Berhasil mengonversi dari {}!", platform),
            StatusKind::Success,
        );

        self.hide_loading();
    }

    /// Start a new search, replacing the current results
    pub async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return self.reject(InputError::EmptyQuery);
        }

        self.show_loading();
        self.results.clear();
        self.state.begin_search(query);

        self.fetch_page(1).await;

        self.show_status(
            format!("Ditemukan {} hasil untuk \"{}\".", TOTAL_RESULTS, query),
            StatusKind::Success,
        );
        self.hide_loading();
    }

    /// Append the next page of the current search. Returns whether a page was loaded.
    pub async fn load_more(&mut self) -> bool {
        if !self.state.can_load_more() {
            return false;
        }
        let page = self.state.advance_page();
        self.fetch_page(page).await;
        true
    }

    async fn fetch_page(&mut self, page: usize) {
        Self::pause(self.delays.search).await;

        let songs = generate::search_page(&self.state.current_query, page, Self::stamp(), &mut self.rng);
        self.results.extend(songs);

        self.results_count = format!(
            "{} dari {} hasil ditemukan",
            ViewState::shown_results(page),
            TOTAL_RESULTS
        );
        self.load_more_visible = ViewState::more_after(page);
        if !self.load_more_visible {
            self.state.has_more_results = false;
        }
    }

    /// Record the sort choice. Results keep their order.
    pub fn set_sort(&mut self, value: &str, label: &str) {
        self.state.current_sort = value.to_string();
        self.show_status(format!("Mengurutkan berdasarkan {}...", label), StatusKind::Info);
    }

    /// Replace the trending chart for a time window (`day`, `week`, ...)
    pub async fn load_trending(&mut self, window: &str) {
        Self::pause(self.delays.trending).await;
        self.trending_window = window.to_string();
        self.trending = generate::trending(Self::stamp(), &mut self.rng);
    }

    /// Open the details modal for a card. Quality starts over at the default.
    pub async fn show_details(&mut self, song: &Song) {
        self.quality = FlacQuality::default();
        self.modal = Modal::Loading;
        Self::pause(self.delays.details).await;
        self.modal = Modal::Open(generate::song_details(song));
    }

    /// Open the details modal for a trending card
    pub async fn show_trending_details(&mut self, item: &TrendingItem) {
        self.show_details(&item.to_song()).await;
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Play out a download in the selected quality and close the modal
    pub async fn download(&mut self, song: &Song) {
        let quality = self.quality;
        self.show_status(
            format!("Mengunduh \"{}\" dalam kualitas {}...", song.title, quality.label()),
            StatusKind::Info,
        );

        Self::pause(self.delays.download).await;

        self.show_status(format!("\"{}\" berhasil diunduh!", song.title), StatusKind::Success);
        let link = DownloadLink {
            href: "#".to_string(),
            filename: generate::download_filename(&song.title, quality.key()),
        };
        tracing::debug!(filename = %link.filename, "Placeholder download link clicked");
        self.downloads.push(link);

        Self::pause(self.delays.close_after_download).await;
        self.close_modal();
    }

    pub fn preview(&mut self, _song_id: &str) {
        self.show_status("Fitur preview akan segera tersedia.", StatusKind::Info);
    }

    /// First load: trending chart, welcome banner and a sample search
    pub async fn initialize(&mut self) {
        self.load_trending(INITIAL_TRENDING_WINDOW).await;
        self.show_status(WELCOME, StatusKind::Info);
        self.search(INITIAL_QUERY).await;
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Delays::default())
    }
}
