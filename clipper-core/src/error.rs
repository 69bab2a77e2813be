//! Error types for Clipper Core

use thiserror::Error;

/// Result type alias using ClipperError
pub type Result<T> = std::result::Result<T, ClipperError>;

/// Top-level error type for all Clipper operations
#[derive(Debug, Error)]
pub enum ClipperError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unexpected structural problems inside a single clipping block.
///
/// A block that simply is not an annotation (bookmark, missing author, empty
/// content) is never reported through this type; it is skipped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid location number: {0}")]
    InvalidLocation(String),
}

/// Errors that occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
