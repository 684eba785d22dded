//! Stream endpoint resolution
//!
//! Turns a track identifier plus the server's current base URL into the
//! address the audio element will fetch from. Pure address construction, no
//! network access.

use crate::error::{PlaybackError, Result};
use phono_core::TrackId;

/// Read-only view of the active server endpoint
///
/// Implemented by the server session coordinator; the orchestrator re-reads
/// it on every selection so the audio source stays synchronized with the
/// current server instance.
pub trait StreamEndpoint: Send + Sync {
    /// Current base URL, `None` when the server is not running
    fn base_url(&self) -> Option<String>;
}

/// Build the stream URL for a track
///
/// The `<base>/stream/<id>` shape is the wire contract with the streaming
/// server and is constructed by exact concatenation.
pub fn stream_url(base_url: &str, id: &TrackId) -> Result<String> {
    if base_url.is_empty() {
        return Err(PlaybackError::StreamUnavailable(
            "no server base URL".to_string(),
        ));
    }
    Ok(format!("{}/stream/{}", base_url, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_unavailable() {
        let err = stream_url("", &TrackId::new("song.mp3")).unwrap_err();
        assert!(matches!(err, PlaybackError::StreamUnavailable(_)));
    }

    #[test]
    fn url_is_exact_concatenation() {
        let url = stream_url("http://192.168.1.10:3030", &TrackId::new("song.mp3")).unwrap();
        assert_eq!(url, "http://192.168.1.10:3030/stream/song.mp3");
    }

    #[test]
    fn id_is_not_rewritten() {
        // Ids are file names and may contain spaces; the element is
        // responsible for any escaping its transport needs.
        let url = stream_url("http://h:1", &TrackId::new("my song.mp3")).unwrap();
        assert_eq!(url, "http://h:1/stream/my song.mp3");
    }
}
