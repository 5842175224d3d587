/// Shared application state
use std::sync::Arc;
use twoflac_core::{Latency, MockBackend, MusicBackend};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn MusicBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn MusicBackend>) -> Self {
        Self { backend }
    }

    /// State backed by `MockBackend` with the given latency
    pub fn mock(latency: Latency) -> Self {
        Self::new(Arc::new(MockBackend::new(latency)))
    }
}
