//! Phono Core
//!
//! Shared types, traits, and error handling for Phono.
//!
//! This crate provides the foundational building blocks used across the
//! playback orchestrator, the catalog service, and the streaming server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `TrackId`, `Catalog`
//! - **Core Traits**: `CatalogSource`
//! - **Error Handling**: Unified `PhonoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use phono_core::types::{Catalog, Track, TrackId};
//!
//! let track = Track::new("01 - intro.mp3");
//! assert_eq!(track.display_title(), "01 - intro.mp3");
//!
//! let catalog = Catalog::new(vec![track.clone()]);
//! assert_eq!(catalog.position_of(&track.id), Some(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{PhonoError, Result};
pub use traits::CatalogSource;
pub use types::{Catalog, Track, TrackId};
