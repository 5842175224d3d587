//! Status banner shown above the results

use std::time::Duration;
use tokio::time::Instant;

/// Success and info banners hide themselves after this long
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
    Info,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
            StatusKind::Warning => "status-warning",
            StatusKind::Info => "status-info",
        }
    }

    /// Errors and warnings stay until replaced
    pub fn auto_dismiss(&self) -> Option<Duration> {
        match self {
            StatusKind::Success | StatusKind::Info => Some(AUTO_DISMISS),
            StatusKind::Error | StatusKind::Warning => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

impl StatusBanner {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.kind.auto_dismiss() {
            Some(after) => now.saturating_duration_since(self.shown_at) < after,
            None => true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}
