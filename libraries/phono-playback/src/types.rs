//! Core types for playback orchestration

use phono_core::Track;
use serde::{Deserialize, Serialize};

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track selected
    Idle,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Navigation direction for track advancement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Forward: sequential order, or uniform random in shuffle mode
    Next,

    /// Backward: always sequential, regardless of shuffle mode
    Previous,
}

/// Configuration for the playback session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial shuffle mode (default: off)
    pub shuffle: bool,
}

/// Read-only projection of the playback session for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// The selected track, if any
    pub current_track: Option<Track>,

    /// Whether the audio element is playing
    pub is_playing: bool,

    /// Whether forward navigation is randomized
    pub shuffle: bool,
}

impl SessionSnapshot {
    /// Derived state-machine state
    pub fn state(&self) -> PlaybackState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }
}
