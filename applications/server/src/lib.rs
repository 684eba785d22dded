//! Phono Streaming Server
//!
//! Local HTTP server feeding the playback front end: catalog listing, audio
//! byte streaming with range support, upload, and delete.
//!
//! The server is embeddable: the player starts and stops it in-process
//! through [`start_server`] / [`ServerHandle`], and reads the bound address
//! back as the stream base URL.

pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use lifecycle::{start_server, ServerHandle};
pub use state::AppState;

/// Build the application router
///
/// The `/stream/:track_id` route shape is the contract with the playback
/// orchestrator and must not change.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health::health))
        .route("/tracks", get(api::tracks::list_tracks))
        .route("/tracks/:id", delete(api::tracks::delete_track))
        .route("/upload", post(api::tracks::upload_track))
        .route("/stream/:track_id", get(api::stream::stream_track))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
