//! Domain types for Phono

mod catalog;
mod ids;
mod track;

pub use catalog::Catalog;
pub use ids::TrackId;
pub use track::Track;
