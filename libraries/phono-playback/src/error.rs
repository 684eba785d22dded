//! Error types for playback orchestration

use thiserror::Error;

/// Playback errors
///
/// Transport operations never panic and never fail on merely invalid input
/// (those are no-ops); these kinds cover the genuinely reportable outcomes.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No stream endpoint is resolvable (server not running / base URL empty)
    #[error("Stream unavailable: {0}")]
    StreamUnavailable(String),

    /// The audio element rejected a command
    #[error("Audio element error: {0}")]
    Element(String),
}

impl From<PlaybackError> for phono_core::PhonoError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::StreamUnavailable(msg) => {
                phono_core::PhonoError::StreamUnavailable(msg)
            }
            PlaybackError::Element(msg) => phono_core::PhonoError::Other(msg),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
