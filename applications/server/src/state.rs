/// Shared application state
use phono_catalog::MusicLibrary;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<MusicLibrary>,
}

impl AppState {
    pub fn new(library: Arc<MusicLibrary>) -> Self {
        Self { library }
    }
}
