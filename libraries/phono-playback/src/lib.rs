//! Phono - Playback Orchestration
//!
//! The state machine at the center of the player: it owns current-track
//! state, interprets transport commands, derives "next track" under
//! sequential and shuffle policies, and reacts to natural end-of-track by
//! auto-advancing.
//!
//! This crate provides:
//! - Transport operations (select/toggle/restart/next/previous/shuffle)
//! - Sequential and shuffle ordering over a catalog snapshot
//! - Stream URL resolution against the active server endpoint
//! - An opaque audio element seam (`AudioElement`)
//! - Playback events for presentation synchronization
//!
//! # Architecture
//!
//! `phono-playback` is completely backend-agnostic:
//! - No dependency on any audio decoding or output stack
//! - No dependency on the streaming server or the catalog scanner
//!
//! The audio rendering primitive and the server endpoint are both provided
//! via traits by the embedding layer.
//!
//! # Example
//!
//! ```rust
//! use phono_core::{Catalog, Track};
//! use phono_playback::{
//!     DetachedElement, Direction, PlayerSession, SessionConfig, StreamEndpoint,
//! };
//! use std::sync::Arc;
//!
//! struct LocalServer;
//!
//! impl StreamEndpoint for LocalServer {
//!     fn base_url(&self) -> Option<String> {
//!         Some("http://127.0.0.1:3030".to_string())
//!     }
//! }
//!
//! let mut session = PlayerSession::new(
//!     Box::new(DetachedElement::new()),
//!     Arc::new(LocalServer),
//!     SessionConfig::default(),
//! );
//!
//! let tracks = vec![Track::new("a.mp3"), Track::new("b.mp3")];
//! session.set_catalog(Catalog::new(tracks.clone()));
//!
//! session.select_track(&tracks[0]).unwrap();
//! assert!(session.is_playing());
//!
//! session.advance(Direction::Next).unwrap();
//! assert_eq!(session.current_track().unwrap().file_name, "b.mp3");
//! ```

mod element;
mod error;
mod events;
mod resolver;
mod session;
pub mod types;

// Public exports
pub use element::{AudioElement, DetachedElement};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use resolver::{stream_url, StreamEndpoint};
pub use session::PlayerSession;
pub use types::{Direction, PlaybackState, SessionConfig, SessionSnapshot};
