//! Phono Player
//!
//! The playback front end: wires the orchestrator, the embedded streaming
//! server, and the track catalog together behind a single facade.
//!
//! The [`PlayerApp`] surface is what a presentation shell talks to: the five
//! transport operations, the two server lifecycle operations, catalog
//! refresh, and read-only state projections. Every operation catches its
//! component error here, logs it, and returns the typed kind; failures
//! degrade to "no playback / no server", never a crash.

mod coordinator;

pub use coordinator::{ServerCoordinator, ServerSnapshot};

use phono_catalog::{MusicLibrary, PlayCountStore};
use phono_core::{Catalog, CatalogSource, Result, Track, TrackId};
use phono_playback::{
    AudioElement, Direction, PlaybackEvent, PlayerSession, SessionConfig, SessionSnapshot,
    StreamEndpoint,
};
use phono_server::ServerConfig;
use std::sync::Arc;

/// The playback front end
///
/// Single owner of all mutable session state. User intents and the audio
/// element's end-of-media notification are serialized through `&mut self`
/// calls, so no two state transitions race; rapid repeated intents follow
/// last-write-wins on the current selection.
pub struct PlayerApp {
    coordinator: Arc<ServerCoordinator>,
    catalog_source: Arc<dyn CatalogSource>,
    session: PlayerSession,
}

impl PlayerApp {
    /// Build the app over a music directory described by the server config
    ///
    /// The audio element is injected by the shell; headless callers can use
    /// [`phono_playback::DetachedElement`]. The catalog is fetched once at
    /// construction, like the original front end does on mount.
    pub fn new(config: ServerConfig, element: Box<dyn AudioElement>) -> Result<Self> {
        let counts = Arc::new(PlayCountStore::open(&config.storage.play_counts_path));
        let library = Arc::new(MusicLibrary::new(&config.storage.music_dir, counts));
        library
            .initialize()
            .map_err(phono_core::PhonoError::from)?;

        let coordinator = Arc::new(ServerCoordinator::new(config, Arc::clone(&library)));
        let session = PlayerSession::new(
            element,
            Arc::clone(&coordinator) as Arc<dyn StreamEndpoint>,
            SessionConfig::default(),
        );

        let mut app = Self {
            coordinator,
            catalog_source: library,
            session,
        };

        // Initial catalog fetch; an empty or unreadable directory is not fatal
        if let Err(e) = app.refresh_catalog() {
            tracing::warn!("Initial catalog fetch failed: {}", e);
        }
        Ok(app)
    }

    // ===== Server lifecycle =====

    /// Start the embedded streaming server
    ///
    /// Always refreshes the catalog afterwards, success or failure: the
    /// server's availability may unblock previously-unreachable metadata.
    pub async fn start_server(&mut self) -> Result<()> {
        let result = self.coordinator.start().await;
        if let Err(ref e) = result {
            tracing::error!("Failed to start server: {}", e);
        }

        if let Err(e) = self.refresh_catalog() {
            tracing::error!("Failed to fetch tracks: {}", e);
        }

        result.map(|_| ())
    }

    /// Stop the embedded streaming server
    ///
    /// Does not stop a playing audio element; its source stays bound to the
    /// now-dead server and later play attempts fail at the transport layer.
    pub async fn stop_server(&mut self) -> Result<()> {
        let result = self.coordinator.stop().await;
        if let Err(ref e) = result {
            tracing::error!("Failed to stop server: {}", e);
        }
        result
    }

    // ===== Catalog =====

    /// Re-fetch the catalog snapshot into the session
    pub fn refresh_catalog(&mut self) -> Result<()> {
        let tracks = self.catalog_source.tracks()?;
        self.session.set_catalog(Catalog::new(tracks));
        Ok(())
    }

    /// Current catalog snapshot for display
    pub fn tracks(&self) -> Vec<Track> {
        self.session.catalog().tracks().to_vec()
    }

    // ===== Transport =====

    /// Select a track (or pause it when it is already playing)
    pub fn select_track(&mut self, track: &Track) -> Result<()> {
        self.session.select_track(track).map_err(|e| {
            tracing::error!("Failed to play track {}: {}", track.id, e);
            e.into()
        })
    }

    /// Select a track by its catalog id
    pub fn select_track_by_id(&mut self, id: &TrackId) -> Result<()> {
        let Some(track) = self.session.catalog().iter().find(|t| &t.id == id).cloned() else {
            return Err(phono_core::PhonoError::TrackNotFound(id.clone()));
        };
        self.select_track(&track)
    }

    /// Toggle between playing and paused
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        self.session.toggle_play_pause().map_err(|e| {
            tracing::error!("Failed to toggle playback: {}", e);
            e.into()
        })
    }

    /// Restart the current track from the beginning
    pub fn restart(&mut self) -> Result<()> {
        self.session.restart().map_err(|e| {
            tracing::error!("Failed to restart track: {}", e);
            e.into()
        })
    }

    /// Skip forward (sequential or shuffled)
    pub fn next(&mut self) -> Result<()> {
        self.session.advance(Direction::Next).map_err(|e| {
            tracing::error!("Failed to advance: {}", e);
            e.into()
        })
    }

    /// Skip backward (always sequential)
    pub fn previous(&mut self) -> Result<()> {
        self.session.advance(Direction::Previous).map_err(|e| {
            tracing::error!("Failed to advance: {}", e);
            e.into()
        })
    }

    /// Toggle shuffle mode
    pub fn set_shuffle(&mut self, enabled: bool) {
        self.session.set_shuffle_mode(enabled);
    }

    /// Notification from the element observer: the track finished naturally
    pub fn on_playback_ended(&mut self) -> Result<()> {
        self.session.on_playback_ended().map_err(|e| {
            tracing::error!("Failed to auto-advance: {}", e);
            e.into()
        })
    }

    // ===== State projections =====

    /// Read-only playback session state
    pub fn playback(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    /// Read-only server session state
    pub fn server(&self) -> ServerSnapshot {
        self.coordinator.snapshot()
    }

    /// Take queued playback events for presentation synchronization
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.session.drain_events()
    }
}
