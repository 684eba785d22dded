/// Play-count persistence
use crate::error::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistent per-track play counts
///
/// A JSON sidecar keyed by track id. Counts only ever grow; the streaming
/// server increments them on successful playback start and the catalog reads
/// them back into track snapshots.
#[derive(Debug)]
pub struct PlayCountStore {
    path: PathBuf,
    counts: Mutex<HashMap<String, u32>>,
}

impl PlayCountStore {
    /// Open (or create) a play-count store at the given file path
    ///
    /// A missing or unreadable file starts an empty store rather than
    /// failing: losing counts degrades the display, nothing else.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let counts = fs::read(&path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        Self {
            path,
            counts: Mutex::new(counts),
        }
    }

    /// Current count for a track id
    pub fn get(&self, id: &str) -> u32 {
        self.counts
            .lock()
            .expect("play-count lock poisoned")
            .get(id)
            .copied()
            .unwrap_or(0)
    }

    /// Increment a track's count and persist immediately
    ///
    /// Returns the new count.
    pub fn increment(&self, id: &str) -> Result<u32> {
        let mut counts = self.counts.lock().expect("play-count lock poisoned");
        let count = counts.entry(id.to_string()).or_insert(0);
        *count += 1;
        let new_count = *count;
        self.persist(&counts)?;
        Ok(new_count)
    }

    /// Drop a track's count entirely (track deleted)
    pub fn remove(&self, id: &str) -> Result<()> {
        let mut counts = self.counts.lock().expect("play-count lock poisoned");
        if counts.remove(id).is_some() {
            self.persist(&counts)?;
        }
        Ok(())
    }

    fn persist(&self, counts: &HashMap<String, u32>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(counts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Path of the sidecar file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn counts_start_at_zero_and_grow() {
        let dir = TempDir::new().unwrap();
        let store = PlayCountStore::open(dir.path().join("play_counts.json"));

        assert_eq!(store.get("a.mp3"), 0);
        assert_eq!(store.increment("a.mp3").unwrap(), 1);
        assert_eq!(store.increment("a.mp3").unwrap(), 2);
        assert_eq!(store.get("a.mp3"), 2);
        assert_eq!(store.get("b.mp3"), 0);
    }

    #[test]
    fn counts_survive_reopening() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("play_counts.json");

        {
            let store = PlayCountStore::open(&path);
            store.increment("a.mp3").unwrap();
            store.increment("a.mp3").unwrap();
        }

        let reopened = PlayCountStore::open(&path);
        assert_eq!(reopened.get("a.mp3"), 2);
    }

    #[test]
    fn corrupt_sidecar_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("play_counts.json");
        fs::write(&path, b"not json").unwrap();

        let store = PlayCountStore::open(&path);
        assert_eq!(store.get("a.mp3"), 0);
    }

    #[test]
    fn remove_clears_a_count() {
        let dir = TempDir::new().unwrap();
        let store = PlayCountStore::open(dir.path().join("play_counts.json"));
        store.increment("a.mp3").unwrap();

        store.remove("a.mp3").unwrap();

        assert_eq!(store.get("a.mp3"), 0);
    }
}
