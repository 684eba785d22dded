/// Catalog domain type
use crate::types::{Track, TrackId};
use serde::{Deserialize, Serialize};

/// Ordered sequence of tracks known to the system
///
/// Order is defined by the catalog service and stays stable for the duration
/// of a session unless re-fetched. Next/previous navigation is defined purely
/// in terms of this order and the current track's position within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Create a catalog from an ordered track list
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Position of a track id within the catalog order
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Track at a catalog position
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over tracks in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// All tracks in catalog order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

impl From<Vec<Track>> for Catalog {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().map(|n| Track::new(*n)).collect())
    }

    #[test]
    fn position_lookup_follows_order() {
        let catalog = catalog_of(&["a.mp3", "b.mp3", "c.mp3"]);
        assert_eq!(catalog.position_of(&TrackId::new("a.mp3")), Some(0));
        assert_eq!(catalog.position_of(&TrackId::new("c.mp3")), Some(2));
        assert_eq!(catalog.position_of(&TrackId::new("missing.mp3")), None);
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get(0).is_none());
    }
}
