/// Tracks API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use phono_catalog::is_supported_audio;
use phono_core::{Track, TrackId};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<Track>,
}

/// GET /tracks
///
/// The catalog snapshot contract consumed by the front end: an ordered track
/// list, re-fetched to observe uploads, deletions, and play-count changes.
pub async fn list_tracks(State(app_state): State<AppState>) -> Result<Json<TracksResponse>> {
    let tracks = app_state.library.scan()?;
    Ok(Json(TracksResponse { tracks }))
}

/// DELETE /tracks/:id
pub async fn delete_track(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let track_id = TrackId::new(id);
    app_state.library.remove_track(&track_id)?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /upload
/// Upload an audio file into the music directory
pub async fn upload_track(
    State(app_state): State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<serde_json::Value>> {
    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::BadRequest("Missing Content-Type".to_string()))?;

    if !content_type.starts_with("multipart/form-data") {
        return Err(ServerError::BadRequest(
            "Expected multipart/form-data".to_string(),
        ));
    }

    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .ok_or_else(|| ServerError::BadRequest("Missing boundary".to_string()))?;

    // Convert Bytes to a stream for multer
    let stream = futures_util::stream::once(async move { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut uploaded: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::BadRequest(format!("Failed to parse multipart: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        // Strip any client-provided directory components
        let file_name = std::path::Path::new(&file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| ServerError::BadRequest("Invalid file name".to_string()))?;

        // Only accept supported audio formats
        if !is_supported_audio(&file_name) {
            tracing::warn!("Rejecting upload of unsupported file: {}", file_name);
            continue;
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| ServerError::BadRequest(format!("Failed to read file: {}", e)))?;

        let target = app_state.library.music_dir().join(&file_name);
        tokio::fs::write(&target, &data).await?;
        tracing::info!("Uploaded {} ({} bytes)", file_name, data.len());
        uploaded.push(file_name);
    }

    if uploaded.is_empty() {
        return Err(ServerError::BadRequest(
            "No supported audio file in upload".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({ "uploaded": uploaded })))
}
