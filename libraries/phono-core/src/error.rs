/// Core error types for Phono
use thiserror::Error;

use crate::types::TrackId;

/// Result type alias using `PhonoError`
pub type Result<T> = std::result::Result<T, PhonoError>;

/// Core error type for Phono
///
/// Every failure in the system degrades to "no playback / no server": errors
/// are caught at the boundary of the operation that raised them, logged, and
/// reported through these kinds. Nothing here is fatal.
#[derive(Error, Debug)]
pub enum PhonoError {
    /// The streaming server could not be started
    #[error("Server start failed: {0}")]
    ServerStartFailed(String),

    /// The streaming server could not be stopped
    #[error("Server stop failed: {0}")]
    ServerStopFailed(String),

    /// The track catalog could not be fetched
    #[error("Catalog fetch failed: {0}")]
    FetchCatalogFailed(String),

    /// Playback was attempted with no resolvable stream endpoint
    #[error("Stream unavailable: {0}")]
    StreamUnavailable(String),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl PhonoError {
    /// Create a server-start error
    pub fn server_start(msg: impl Into<String>) -> Self {
        Self::ServerStartFailed(msg.into())
    }

    /// Create a server-stop error
    pub fn server_stop(msg: impl Into<String>) -> Self {
        Self::ServerStopFailed(msg.into())
    }

    /// Create a catalog-fetch error
    pub fn fetch_catalog(msg: impl Into<String>) -> Self {
        Self::FetchCatalogFailed(msg.into())
    }

    /// Create a stream-unavailable error
    pub fn stream_unavailable(msg: impl Into<String>) -> Self {
        Self::StreamUnavailable(msg.into())
    }
}
