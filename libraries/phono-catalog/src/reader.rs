/// Tag reader implementation using lofty
use crate::error::{CatalogError, Result};
use lofty::TaggedFileExt;
use std::path::Path;

/// Display tags extracted from an audio file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    /// Track title
    pub title: Option<String>,

    /// Artist name
    pub artist: Option<String>,

    /// Album name
    pub album: Option<String>,
}

/// Tag reader using the lofty library
pub struct TagReader;

impl TagReader {
    /// Create a new tag reader
    pub fn new() -> Self {
        Self
    }

    /// Extract display tags from a lofty tag
    fn extract_from_tag(tag: &lofty::Tag) -> TrackTags {
        let mut tags = TrackTags::default();

        for item in tag.items() {
            match item.key() {
                lofty::ItemKey::TrackTitle => {
                    tags.title = item.value().text().map(|s| s.to_string());
                }
                lofty::ItemKey::TrackArtist => {
                    tags.artist = item.value().text().map(|s| s.to_string());
                }
                lofty::ItemKey::AlbumTitle => {
                    tags.album = item.value().text().map(|s| s.to_string());
                }
                _ => {}
            }
        }

        tags
    }

    /// Read display tags from an audio file
    ///
    /// A file without any tag yields empty tags; an unreadable file is an
    /// error (callers decide whether to fall back to the file name).
    pub fn read(&self, path: &Path) -> Result<TrackTags> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.display().to_string()));
        }

        let tagged_file =
            lofty::read_from_path(path).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let tags = if let Some(primary) = tagged_file.primary_tag() {
            Self::extract_from_tag(primary)
        } else if let Some(first) = tagged_file.tags().first() {
            Self::extract_from_tag(first)
        } else {
            TrackTags::default()
        };

        Ok(tags)
    }
}

impl Default for TagReader {
    fn default() -> Self {
        Self::new()
    }
}
