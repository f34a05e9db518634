//! Error types for the cardscan-core library.

use thiserror::Error;

/// Main error type for the cardscan library.
#[derive(Error, Debug)]
pub enum CardscanError {
    /// Card-scan workflow error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the card-scan workflow around the extractor.
///
/// Field extraction itself never fails; these cover the input image, the
/// text detector and the "nothing useful found" policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// No image was supplied.
    #[error("no image was provided")]
    MissingImage,

    /// The image is not a base64 `data:image/...` URL.
    #[error("invalid image format: {0}")]
    InvalidImageFormat(String),

    /// The decoded image exceeds the configured limit.
    #[error("image is too large: {size} bytes (maximum {max} bytes)")]
    ImageTooLarge { size: usize, max: usize },

    /// The text detector failed.
    #[error("text detection failed: {0}")]
    Detector(String),

    /// The text detector found no text in the image.
    #[error("no text was detected in the image")]
    NoTextDetected,

    /// Text was detected but no company, name, email or phone came out of it.
    #[error("no relevant information could be extracted from the image")]
    NothingExtracted,
}

/// Result type for the cardscan library.
pub type Result<T> = std::result::Result<T, CardscanError>;
