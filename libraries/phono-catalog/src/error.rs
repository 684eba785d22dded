/// Catalog-specific errors
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Tag parsing error
    #[error("Tag parsing error: {0}")]
    ParseError(String),

    /// Track id that escapes the music directory
    #[error("Invalid track id: {0}")]
    InvalidTrackId(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Play-count persistence error
    #[error(transparent)]
    Persistence(#[from] serde_json::Error),
}

impl From<CatalogError> for phono_core::PhonoError {
    fn from(err: CatalogError) -> Self {
        phono_core::PhonoError::FetchCatalogFailed(err.to_string())
    }
}
