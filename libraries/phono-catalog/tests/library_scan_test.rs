//! Library scanning against real directories

use phono_catalog::{MusicLibrary, PlayCountStore};
use phono_core::TrackId;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Untagged fixtures are enough here: the scanner keeps unparseable files in
/// the catalog with the file name as their display handle, which is exactly
/// the original fallback behavior.
fn write_fixture(dir: &std::path::Path, name: &str) {
    fs::write(dir.join(name), b"\x00fixture-bytes").unwrap();
}

fn library_with(names: &[&str]) -> (TempDir, MusicLibrary) {
    let dir = TempDir::new().unwrap();
    let music_dir = dir.path().join("music");
    fs::create_dir_all(&music_dir).unwrap();
    for name in names {
        write_fixture(&music_dir, name);
    }

    let counts = Arc::new(PlayCountStore::open(dir.path().join("play_counts.json")));
    let library = MusicLibrary::new(music_dir, counts);
    (dir, library)
}

#[test]
fn scan_orders_by_file_name() {
    let (_dir, library) = library_with(&["c.mp3", "a.mp3", "b.mp3"]);

    let tracks = library.scan().unwrap();

    let names: Vec<&str> = tracks.iter().map(|t| t.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.mp3", "b.mp3", "c.mp3"]);
}

#[test]
fn scan_skips_unsupported_files() {
    let (_dir, library) = library_with(&["a.mp3", "cover.jpg", "notes.txt"]);

    let tracks = library.scan().unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].file_name, "a.mp3");
}

#[test]
fn scan_skips_subdirectories() {
    let (_dir, library) = library_with(&["a.mp3"]);
    fs::create_dir_all(library.music_dir().join("nested")).unwrap();
    write_fixture(&library.music_dir().join("nested"), "hidden.mp3");

    let tracks = library.scan().unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].file_name, "a.mp3");
}

#[test]
fn untagged_files_fall_back_to_file_name() {
    let (_dir, library) = library_with(&["a.mp3"]);

    let tracks = library.scan().unwrap();

    assert!(tracks[0].title.is_none());
    assert_eq!(tracks[0].display_title(), "a.mp3");
}

#[test]
fn play_counts_surface_in_the_catalog() {
    let (_dir, library) = library_with(&["a.mp3", "b.mp3"]);
    library.counts().increment("a.mp3").unwrap();
    library.counts().increment("a.mp3").unwrap();

    let tracks = library.scan().unwrap();

    assert_eq!(tracks[0].play_count, 2);
    assert_eq!(tracks[1].play_count, 0);
}

#[test]
fn remove_track_deletes_file_and_count() {
    let (_dir, library) = library_with(&["a.mp3", "b.mp3"]);
    library.counts().increment("a.mp3").unwrap();

    library.remove_track(&TrackId::new("a.mp3")).unwrap();

    let tracks = library.scan().unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].file_name, "b.mp3");
    assert_eq!(library.counts().get("a.mp3"), 0);
}

#[test]
fn ids_survive_rescans() {
    let (_dir, library) = library_with(&["a.mp3", "b.mp3"]);

    let first = library.scan().unwrap();
    let second = library.scan().unwrap();

    assert_eq!(first, second);
}
