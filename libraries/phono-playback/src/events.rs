//! Playback events
//!
//! Event-based communication for presentation synchronization. Events are
//! queued by the session and drained by the embedding layer after each
//! operation.

use crate::types::PlaybackState;
use phono_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed (playing, paused, idle)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Selection moved to a different track
    TrackChanged {
        /// Id of the newly selected track
        track_id: TrackId,
        /// Id of the previously selected track, if any
        previous_track_id: Option<TrackId>,
    },

    /// The current track finished playing naturally
    TrackFinished {
        /// Id of the finished track
        track_id: TrackId,
    },

    /// Shuffle mode was toggled
    ShuffleChanged {
        /// Whether forward navigation is now randomized
        enabled: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_for_presentation() {
        let event = PlaybackEvent::TrackChanged {
            track_id: TrackId::new("b.mp3"),
            previous_track_id: Some(TrackId::new("a.mp3")),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("b.mp3"));
        assert!(json.contains("a.mp3"));
    }
}
