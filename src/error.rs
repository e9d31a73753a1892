//! Error types for the ungdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for ungdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading documents and serializing conversion output.
///
/// Conversion itself never fails; malformed document content falls back to
/// plain rendering instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input is not valid JSON or does not match the document schema.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input is JSON but not a Docs document object.
    #[error("Not a Google Docs document: {0}")]
    InvalidDocument(String),

    /// No tab with the requested ID or title.
    #[error("Tab not found: {0}")]
    TabNotFound(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
