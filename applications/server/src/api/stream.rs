/// Audio streaming API
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use phono_core::TrackId;
use std::io::SeekFrom;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

/// GET /stream/:track_id
/// Stream an audio file with range request support
///
/// This is the wire contract with the playback front end: the orchestrator
/// binds `<base>/stream/<id>` as the element source. Play counts are bumped
/// when a stream starts from the beginning, so mid-track seeks by a player
/// do not double-count.
pub async fn stream_track(
    Path(track_id): Path<String>,
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let track_id = TrackId::new(track_id);

    // Resolve inside the music directory (rejects traversal, 404s unknown)
    let file_path = app_state.library.track_path(&track_id)?;

    // Get file metadata
    let metadata = tokio::fs::metadata(&file_path).await?;
    let file_size = metadata.len();

    // Detect MIME type
    let mime_type = mime_guess::from_path(&file_path)
        .first_or_octet_stream()
        .to_string();

    // Check for Range header
    let range_header = headers.get(header::RANGE);

    if let Some(range) = range_header {
        let range_str = range
            .to_str()
            .map_err(|_| ServerError::BadRequest("Invalid Range header".to_string()))?;

        if let Some((start, end)) = parse_range(range_str, file_size) {
            if start == 0 {
                bump_play_count(&app_state, &track_id);
            }

            // Open file and seek to the requested start
            let mut file = File::open(&file_path).await?;
            file.seek(SeekFrom::Start(start)).await?;

            let content_length = end - start + 1;
            let reader = ReaderStream::new(file.take(content_length));
            let body = Body::from_stream(reader);

            let response = Response::builder()
                .status(StatusCode::PARTIAL_CONTENT)
                .header(header::CONTENT_TYPE, mime_type)
                .header(header::CONTENT_LENGTH, content_length)
                .header(
                    header::CONTENT_RANGE,
                    format!("bytes {}-{}/{}", start, end, file_size),
                )
                .header(header::ACCEPT_RANGES, "bytes")
                .body(body)
                .map_err(|e| ServerError::Internal(format!("Failed to build response: {}", e)))?;

            return Ok(response);
        }
    }

    // No range request - stream the entire file
    bump_play_count(&app_state, &track_id);

    let file = File::open(&file_path).await?;
    let reader = ReaderStream::new(file);
    let body = Body::from_stream(reader);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type)
        .header(header::CONTENT_LENGTH, file_size)
        .header(header::ACCEPT_RANGES, "bytes")
        .body(body)
        .map_err(|e| ServerError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}

/// Increment the play count, best effort
///
/// A failed sidecar write must not break the byte stream.
fn bump_play_count(app_state: &AppState, track_id: &TrackId) {
    if let Err(e) = app_state.library.counts().increment(track_id.as_str()) {
        tracing::warn!("Failed to persist play count for {}: {}", track_id, e);
    }
}

/// Parse HTTP Range header
/// Format: "bytes=start-end"
fn parse_range(range: &str, file_size: u64) -> Option<(u64, u64)> {
    let range = range.strip_prefix("bytes=")?;

    if let Some((start_str, end_str)) = range.split_once('-') {
        let start: u64 = start_str.parse().ok()?;
        let end: u64 = if end_str.is_empty() {
            file_size.checked_sub(1)?
        } else {
            end_str.parse().ok()?
        };

        if start <= end && end < file_size {
            return Some((start, end));
        }
    }

    None
}
