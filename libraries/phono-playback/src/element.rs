//! Audio rendering primitive seam
//!
//! The orchestrator commands an opaque playable handle and never looks
//! inside it. Decoding, buffering, and output device handling all live behind
//! this trait.

use crate::error::Result;
use std::time::Duration;

/// Opaque playable handle driven by the orchestrator
///
/// Implementors fetch and render the audio bytes behind a stream URL. The
/// orchestrator only binds sources and issues transport commands; it learns
/// about natural end-of-media when the embedding layer calls
/// [`PlayerSession::on_playback_ended`](crate::PlayerSession::on_playback_ended)
/// on the same serialized context as every other operation.
pub trait AudioElement: Send {
    /// Bind a stream URL as the element's source
    ///
    /// Does not start playback by itself.
    fn set_source(&mut self, url: &str) -> Result<()>;

    /// Start or resume rendering the bound source
    fn play(&mut self) -> Result<()>;

    /// Pause rendering, keeping the source bound and the position intact
    fn pause(&mut self) -> Result<()>;

    /// Seek to a position in the bound source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback position within the bound source
    fn position(&self) -> Duration;
}

/// Element that renders nothing
///
/// Accepts every command and tracks only what a caller could observe from the
/// outside. Useful for headless operation where no audio backend is wired.
#[derive(Debug, Default)]
pub struct DetachedElement {
    source: Option<String>,
    position: Duration,
}

impl DetachedElement {
    /// Create a new detached element with no bound source
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently bound source URL, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl AudioElement for DetachedElement {
    fn set_source(&mut self, url: &str) -> Result<()> {
        self.source = Some(url.to_string());
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_element_tracks_source_and_position() {
        let mut element = DetachedElement::new();
        assert!(element.source().is_none());

        element.set_source("http://127.0.0.1:3030/stream/a.mp3").unwrap();
        assert_eq!(
            element.source(),
            Some("http://127.0.0.1:3030/stream/a.mp3")
        );

        element.seek(Duration::from_secs(42)).unwrap();
        assert_eq!(element.position(), Duration::from_secs(42));

        // Rebinding resets the position
        element.set_source("http://127.0.0.1:3030/stream/b.mp3").unwrap();
        assert_eq!(element.position(), Duration::ZERO);
    }
}
