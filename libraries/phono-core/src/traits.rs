//! Core traits for Phono
//!
//! Seams between the orchestrator and its external collaborators.

use crate::error::Result;
use crate::types::Track;

/// Source of catalog snapshots
///
/// The playback front end only consumes the ordered track list; scanning,
/// tag parsing, and persistence live behind this seam.
pub trait CatalogSource: Send + Sync {
    /// Fetch the current catalog snapshot, in service-defined order
    fn tracks(&self) -> Result<Vec<Track>>;
}
