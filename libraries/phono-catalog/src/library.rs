/// Music library scanning
use crate::counts::PlayCountStore;
use crate::error::{CatalogError, Result};
use crate::reader::TagReader;
use phono_core::{CatalogSource, Track, TrackId};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Supported audio file extensions
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "wav", "m4a", "aac"];

/// Check whether a file name carries a supported audio extension
pub fn is_supported_audio(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// The track catalog service
///
/// Produces ordered catalog snapshots from a flat music directory. Track ids
/// are file names, so a re-scan of an unchanged directory yields identical
/// ids, and uploads/deletes are visible on the next fetch.
pub struct MusicLibrary {
    music_dir: PathBuf,
    reader: TagReader,
    counts: Arc<PlayCountStore>,
}

impl MusicLibrary {
    /// Create a library over a music directory
    pub fn new(music_dir: impl Into<PathBuf>, counts: Arc<PlayCountStore>) -> Self {
        Self {
            music_dir: music_dir.into(),
            reader: TagReader::new(),
            counts,
        }
    }

    /// Create the music directory if it does not exist yet
    pub fn initialize(&self) -> Result<()> {
        if !self.music_dir.exists() {
            std::fs::create_dir_all(&self.music_dir)?;
        }
        Ok(())
    }

    /// The music directory
    pub fn music_dir(&self) -> &Path {
        &self.music_dir
    }

    /// The play-count store backing this library
    pub fn counts(&self) -> &Arc<PlayCountStore> {
        &self.counts
    }

    /// Produce the current catalog snapshot, ordered by file name
    ///
    /// A missing music directory yields an empty catalog. Files whose tags
    /// cannot be parsed still appear, with the file name as their only
    /// display handle.
    pub fn scan(&self) -> Result<Vec<Track>> {
        let mut tracks = Vec::new();

        if !self.music_dir.exists() {
            return Ok(tracks);
        }

        for entry in WalkDir::new(&self.music_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.is_file() || !is_supported_audio(file_name) {
                continue;
            }

            let tags = self.reader.read(path).unwrap_or_default();

            let mut track = Track::new(file_name);
            track.title = tags.title;
            track.artist = tags.artist;
            track.album = tags.album;
            track.play_count = self.counts.get(file_name);
            tracks.push(track);
        }

        tracks.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(tracks)
    }

    /// Resolve a track id to its path inside the music directory
    ///
    /// Rejects ids that try to escape the directory and ids with no file
    /// behind them.
    pub fn track_path(&self, id: &TrackId) -> Result<PathBuf> {
        let name = id.as_str();
        if name.contains("..") || name.contains('/') || name.contains('\\') {
            return Err(CatalogError::InvalidTrackId(name.to_string()));
        }

        let path = self.music_dir.join(name);
        if !path.is_file() {
            return Err(CatalogError::FileNotFound(name.to_string()));
        }
        Ok(path)
    }

    /// Delete a track's file and forget its play count
    pub fn remove_track(&self, id: &TrackId) -> Result<()> {
        let path = self.track_path(id)?;
        std::fs::remove_file(path)?;
        self.counts.remove(id.as_str())?;
        Ok(())
    }
}

impl CatalogSource for MusicLibrary {
    fn tracks(&self) -> phono_core::Result<Vec<Track>> {
        Ok(self.scan()?)
    }
}
