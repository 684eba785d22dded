//! Server session coordination
//!
//! Owns the start/stop lifecycle of the embedded streaming server and the
//! resulting base URL. The orchestrator reads the base URL through the
//! [`StreamEndpoint`] seam on every selection, so a stopped server is
//! observed immediately.

use phono_catalog::MusicLibrary;
use phono_core::{PhonoError, Result};
use phono_playback::StreamEndpoint;
use phono_server::{lifecycle, AppState, ServerConfig, ServerHandle};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

/// Read-only projection of the server session for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSnapshot {
    /// Base URL of the running server, if any
    pub base_url: Option<String>,

    /// Whether the server is running
    pub is_running: bool,
}

/// Owner of the embedded server lifecycle
///
/// State invariant: `is_running` iff a base URL is recorded. Populated on
/// successful start, cleared on stop or start failure.
pub struct ServerCoordinator {
    config: ServerConfig,
    library: Arc<MusicLibrary>,
    handle: Mutex<Option<ServerHandle>>,
    base_url: RwLock<Option<String>>,
}

impl ServerCoordinator {
    /// Create a coordinator over the shared music library
    pub fn new(config: ServerConfig, library: Arc<MusicLibrary>) -> Self {
        Self {
            config,
            library,
            handle: Mutex::new(None),
            base_url: RwLock::new(None),
        }
    }

    /// Start the streaming server
    ///
    /// Returns the base URL on success. Fails when already running or when
    /// the bind fails; on failure the session state stays empty so
    /// subsequent selections hit `StreamUnavailable`.
    pub async fn start(&self) -> Result<String> {
        let mut handle = self.handle.lock().await;
        if handle.is_some() {
            return Err(PhonoError::server_start("server is already running"));
        }

        let state = AppState::new(Arc::clone(&self.library));
        match lifecycle::start_server(&self.config, state).await {
            Ok(started) => {
                let url = started.base_url();
                *self.base_url.write().expect("base-url lock poisoned") = Some(url.clone());
                *handle = Some(started);
                Ok(url)
            }
            Err(e) => {
                *self.base_url.write().expect("base-url lock poisoned") = None;
                Err(PhonoError::server_start(e.to_string()))
            }
        }
    }

    /// Stop the streaming server
    ///
    /// Clears the base URL before shutdown completes; the audio element is
    /// deliberately left alone, its bound source now points at a dead
    /// server and later play attempts fail at the transport layer.
    pub async fn stop(&self) -> Result<()> {
        let mut handle = self.handle.lock().await;
        let Some(running) = handle.take() else {
            return Err(PhonoError::server_stop("server is not running"));
        };

        *self.base_url.write().expect("base-url lock poisoned") = None;
        running
            .shutdown()
            .await
            .map_err(|e| PhonoError::server_stop(e.to_string()))
    }

    /// Whether a server instance is running
    pub fn is_running(&self) -> bool {
        self.base_url
            .read()
            .expect("base-url lock poisoned")
            .is_some()
    }

    /// Read-only projection for presentation
    pub fn snapshot(&self) -> ServerSnapshot {
        let base_url = self.base_url.read().expect("base-url lock poisoned").clone();
        ServerSnapshot {
            is_running: base_url.is_some(),
            base_url,
        }
    }
}

impl StreamEndpoint for ServerCoordinator {
    fn base_url(&self) -> Option<String> {
        self.base_url.read().expect("base-url lock poisoned").clone()
    }
}
