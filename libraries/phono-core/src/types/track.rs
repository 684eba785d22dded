/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Audio track
///
/// An immutable value snapshot from the orchestrator's perspective: the
/// orchestrator never mutates a `Track`, it only re-fetches the catalog to
/// observe updated play counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// File name on disk (fallback display name when `title` is absent)
    pub file_name: String,

    /// Track title from tags
    pub title: Option<String>,

    /// Artist name from tags
    pub artist: Option<String>,

    /// Album name from tags
    pub album: Option<String>,

    /// Number of times the track has been streamed
    ///
    /// Monotonically non-decreasing; mutated only by the streaming server on
    /// successful playback start.
    #[serde(default)]
    pub play_count: u32,
}

impl Track {
    /// Create a new track with minimal metadata
    ///
    /// The id is derived from the file name, matching the catalog service.
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        Self {
            id: TrackId::new(file_name.clone()),
            file_name,
            title: None,
            artist: None,
            album: None,
            play_count: 0,
        }
    }

    /// Title for display, falling back to the file name when untagged
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.file_name)
    }
}
