//! Phono - Track Catalog
//!
//! Catalog service for Phono: music directory scanning, tag reading, and
//! play-count persistence.
//!
//! This crate provides:
//! - Tag reading from audio files (MP3, FLAC, OGG, WAV, AAC, OPUS)
//! - Flat music-directory scanning with file-name track ids
//! - A JSON play-count sidecar, incremented by the streaming server
//!
//! # Example
//!
//! ```rust,no_run
//! use phono_catalog::{MusicLibrary, PlayCountStore};
//! use std::sync::Arc;
//!
//! # fn example() -> phono_catalog::Result<()> {
//! let counts = Arc::new(PlayCountStore::open("data/play_counts.json"));
//! let library = MusicLibrary::new("data/music", counts);
//! library.initialize()?;
//!
//! for track in library.scan()? {
//!     println!("{} ({} plays)", track.display_title(), track.play_count);
//! }
//! # Ok(())
//! # }
//! ```

mod counts;
mod error;
mod library;
mod reader;

pub use counts::PlayCountStore;
pub use error::{CatalogError, Result};
pub use library::{is_supported_audio, MusicLibrary, SUPPORTED_EXTENSIONS};
pub use reader::{TagReader, TrackTags};
