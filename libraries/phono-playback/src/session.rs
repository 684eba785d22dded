//! Playback session - core orchestration
//!
//! Owns current-track state, interprets transport commands, derives the next
//! track under sequential and shuffle policies, and keeps the audio element's
//! source synchronized with the active server endpoint.

use crate::{
    element::AudioElement,
    error::Result,
    events::PlaybackEvent,
    resolver::{self, StreamEndpoint},
    types::{Direction, PlaybackState, SessionConfig, SessionSnapshot},
};
use phono_core::{Catalog, Track};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

/// Central playback orchestration
///
/// All shared playback state lives here and is mutated only through these
/// operations. The embedding layer serializes user intents and the element's
/// end-of-media notification onto this single-owner value, so no two
/// transitions race.
///
/// Operations are no-ops against invalid input (no selection, empty catalog)
/// and report genuine failures through typed errors; they never panic.
pub struct PlayerSession {
    // State
    catalog: Catalog,
    current_track: Option<Track>,
    is_playing: bool,
    shuffle: bool,

    // Collaborators
    element: Box<dyn AudioElement>,
    endpoint: Arc<dyn StreamEndpoint>,

    // Event queue for presentation synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlayerSession {
    /// Create a new playback session
    pub fn new(
        element: Box<dyn AudioElement>,
        endpoint: Arc<dyn StreamEndpoint>,
        config: SessionConfig,
    ) -> Self {
        Self {
            catalog: Catalog::default(),
            current_track: None,
            is_playing: false,
            shuffle: config.shuffle,
            element,
            endpoint,
            pending_events: Vec::new(),
        }
    }

    // ===== Transport Control =====

    /// Select a track and start playing it
    ///
    /// Selecting the track that is already playing is a pause request.
    /// Otherwise the selection always sticks, even when no stream endpoint is
    /// resolvable; in that case the error is returned and playback state is
    /// left untouched.
    pub fn select_track(&mut self, track: &Track) -> Result<()> {
        if self.is_playing
            && self
                .current_track
                .as_ref()
                .is_some_and(|current| current.id == track.id)
        {
            // Tapping the playing track pauses it
            self.element.pause()?;
            self.is_playing = false;
            self.emit_state_changed();
            return Ok(());
        }

        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());

        // Selection intent is recorded before resolution, so a dead server
        // still leaves the chosen track current.
        self.current_track = Some(track.clone());
        if previous_track_id.as_ref() != Some(&track.id) {
            self.pending_events.push(PlaybackEvent::TrackChanged {
                track_id: track.id.clone(),
                previous_track_id,
            });
        }

        let base_url = self.endpoint.base_url().unwrap_or_default();
        let url = resolver::stream_url(&base_url, &track.id)?;

        self.element.set_source(&url)?;
        self.element.play()?;
        self.is_playing = true;
        self.emit_state_changed();
        Ok(())
    }

    /// Toggle between playing and paused
    ///
    /// No-op when nothing is selected. Never re-resolves the stream URL; the
    /// source bound by the last selection stays in place.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.current_track.is_none() {
            return Ok(());
        }

        if self.is_playing {
            self.element.pause()?;
            self.is_playing = false;
        } else {
            self.element.play()?;
            self.is_playing = true;
        }
        self.emit_state_changed();
        Ok(())
    }

    /// Restart the current track from the beginning
    ///
    /// No-op when nothing is selected; plays regardless of prior state.
    pub fn restart(&mut self) -> Result<()> {
        if self.current_track.is_none() {
            return Ok(());
        }

        self.element.seek(Duration::ZERO)?;
        self.element.play()?;
        self.is_playing = true;
        self.emit_state_changed();
        Ok(())
    }

    /// Move selection forward or backward through the catalog
    ///
    /// Forward navigation draws a uniform random index in shuffle mode (the
    /// current track is not excluded); backward navigation is sequential
    /// regardless of shuffle. A current track that has vanished from the
    /// catalog acts as index -1: next wraps to the first track, previous to
    /// the last. The target goes through [`select_track`](Self::select_track),
    /// including its pause-on-reselect behavior.
    pub fn advance(&mut self, direction: Direction) -> Result<()> {
        let Some(current) = self.current_track.as_ref() else {
            return Ok(());
        };
        let len = self.catalog.len();
        if len == 0 {
            return Ok(());
        }

        let current_index = self.catalog.position_of(&current.id);
        let target = match direction {
            Direction::Next if self.shuffle => rand::thread_rng().gen_range(0..len),
            Direction::Next => current_index.map_or(0, |i| (i + 1) % len),
            Direction::Previous => current_index.map_or(len - 1, |i| (i + len - 1) % len),
        };

        let Some(track) = self.catalog.get(target).cloned() else {
            return Ok(());
        };
        self.select_track(&track)
    }

    /// Toggle shuffle mode
    ///
    /// Pure flag flip; only affects subsequent forward navigation.
    pub fn set_shuffle_mode(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;
        self.pending_events
            .push(PlaybackEvent::ShuffleChanged { enabled });
    }

    /// Handle the element's natural end-of-media notification
    ///
    /// The sole automatic transition trigger: always advances forward under
    /// the current shuffle mode.
    pub fn on_playback_ended(&mut self) -> Result<()> {
        if let Some(track) = self.current_track.as_ref() {
            self.pending_events.push(PlaybackEvent::TrackFinished {
                track_id: track.id.clone(),
            });
        }
        self.advance(Direction::Next)
    }

    // ===== Catalog =====

    /// Install a fresh catalog snapshot
    ///
    /// The current selection is kept even when it no longer appears in the
    /// new snapshot; navigation treats it as position -1.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// The current catalog snapshot
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ===== State Queries =====

    /// The selected track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether the element is playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether forward navigation is randomized
    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current playback position reported by the element
    pub fn position(&self) -> Duration {
        self.element.position()
    }

    /// Read-only projection for presentation
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            shuffle: self.shuffle,
        }
    }

    /// Take all queued events for presentation synchronization
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit_state_changed(&mut self) {
        let state = match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        };
        self.pending_events
            .push(PlaybackEvent::StateChanged { state });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::DetachedElement;
    use crate::error::PlaybackError;

    struct FixedEndpoint(Option<String>);

    impl StreamEndpoint for FixedEndpoint {
        fn base_url(&self) -> Option<String> {
            self.0.clone()
        }
    }

    fn session_with_endpoint(base_url: Option<&str>) -> PlayerSession {
        PlayerSession::new(
            Box::new(DetachedElement::new()),
            Arc::new(FixedEndpoint(base_url.map(str::to_string))),
            SessionConfig::default(),
        )
    }

    fn catalog_of(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().map(|n| Track::new(*n)).collect())
    }

    fn playing_session(names: &[&str], current: &str) -> PlayerSession {
        let mut session = session_with_endpoint(Some("http://127.0.0.1:3030"));
        session.set_catalog(catalog_of(names));
        let track = Track::new(current);
        session.select_track(&track).unwrap();
        session
    }

    #[test]
    fn selecting_a_track_starts_playback() {
        let session = playing_session(&["a.mp3", "b.mp3"], "a.mp3");
        assert!(session.is_playing());
        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
    }

    #[test]
    fn selecting_the_playing_track_pauses_it() {
        let mut session = playing_session(&["a.mp3", "b.mp3"], "a.mp3");

        session.select_track(&Track::new("a.mp3")).unwrap();

        assert!(!session.is_playing());
        // The selection itself is unchanged
        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
    }

    #[test]
    fn selection_sticks_when_no_server_is_running() {
        let mut session = session_with_endpoint(None);
        session.set_catalog(catalog_of(&["a.mp3"]));

        let err = session.select_track(&Track::new("a.mp3")).unwrap_err();

        assert!(matches!(err, PlaybackError::StreamUnavailable(_)));
        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
        assert!(!session.is_playing());
    }

    #[test]
    fn toggle_is_a_no_op_with_no_selection() {
        let mut session = session_with_endpoint(Some("http://127.0.0.1:3030"));
        session.toggle_play_pause().unwrap();
        assert!(!session.is_playing());
        assert!(session.current_track().is_none());
    }

    #[test]
    fn paired_toggles_restore_playing_state() {
        let mut session = playing_session(&["a.mp3"], "a.mp3");

        session.toggle_play_pause().unwrap();
        assert!(!session.is_playing());
        session.toggle_play_pause().unwrap();
        assert!(session.is_playing());
    }

    #[test]
    fn restart_plays_from_paused() {
        let mut session = playing_session(&["a.mp3"], "a.mp3");
        session.toggle_play_pause().unwrap();

        session.restart().unwrap();

        assert!(session.is_playing());
    }

    #[test]
    fn restart_is_a_no_op_with_no_selection() {
        let mut session = session_with_endpoint(Some("http://127.0.0.1:3030"));
        session.restart().unwrap();
        assert!(!session.is_playing());
    }

    #[test]
    fn sequential_next_wraps_past_the_last_track() {
        let mut session = playing_session(&["a.mp3", "b.mp3", "c.mp3"], "b.mp3");

        session.advance(Direction::Next).unwrap();
        assert_eq!(session.current_track().unwrap().file_name, "c.mp3");

        session.advance(Direction::Next).unwrap();
        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
    }

    #[test]
    fn previous_is_sequential_even_in_shuffle_mode() {
        let mut session = playing_session(&["a.mp3", "b.mp3", "c.mp3"], "b.mp3");
        session.set_shuffle_mode(true);

        session.advance(Direction::Previous).unwrap();

        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
    }

    #[test]
    fn vanished_current_track_acts_as_position_minus_one() {
        let mut session = playing_session(&["a.mp3", "b.mp3", "c.mp3"], "b.mp3");
        session.set_catalog(catalog_of(&["x.mp3", "y.mp3", "z.mp3"]));

        session.advance(Direction::Next).unwrap();
        assert_eq!(session.current_track().unwrap().file_name, "x.mp3");

        session.set_catalog(catalog_of(&["p.mp3", "q.mp3", "r.mp3"]));
        session.advance(Direction::Previous).unwrap();
        // Previous past a vanished current lands on the last track
        assert_eq!(session.current_track().unwrap().file_name, "r.mp3");
    }

    #[test]
    fn advance_is_a_no_op_on_an_empty_catalog() {
        let mut session = playing_session(&["a.mp3"], "a.mp3");
        session.set_catalog(Catalog::default());

        session.advance(Direction::Next).unwrap();

        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
        assert!(session.is_playing());
    }

    #[test]
    fn advance_is_a_no_op_with_no_selection() {
        let mut session = session_with_endpoint(Some("http://127.0.0.1:3030"));
        session.set_catalog(catalog_of(&["a.mp3"]));

        session.advance(Direction::Next).unwrap();

        assert!(session.current_track().is_none());
    }

    #[test]
    fn natural_end_advances_forward() {
        let mut session = playing_session(&["a.mp3", "b.mp3"], "a.mp3");

        session.on_playback_ended().unwrap();

        assert_eq!(session.current_track().unwrap().file_name, "b.mp3");
        assert!(session.is_playing());
    }

    #[test]
    fn shuffle_flip_does_not_touch_the_current_track() {
        let mut session = playing_session(&["a.mp3", "b.mp3"], "a.mp3");

        session.set_shuffle_mode(true);

        assert!(session.is_shuffle());
        assert_eq!(session.current_track().unwrap().file_name, "a.mp3");
        assert!(session.is_playing());
    }

    #[test]
    fn events_record_track_and_state_transitions() {
        let mut session = playing_session(&["a.mp3", "b.mp3"], "a.mp3");
        session.drain_events();

        session.advance(Direction::Next).unwrap();
        let events = session.drain_events();

        assert!(events.iter().any(|e| matches!(
            e,
            PlaybackEvent::TrackChanged { track_id, .. } if track_id.as_str() == "b.mp3"
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            PlaybackEvent::StateChanged {
                state: PlaybackState::Playing
            }
        )));
        // Draining empties the queue
        assert!(session.drain_events().is_empty());
    }
}
