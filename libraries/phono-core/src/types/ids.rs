/// ID types for Phono entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Stable and unique within a catalog snapshot. Ids are derived from the
/// track's file name by the catalog service, so they survive re-scans of an
/// unchanged music directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_round_trips_through_serde() {
        let id = TrackId::new("song.mp3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"song.mp3\"");
        let back: TrackId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
