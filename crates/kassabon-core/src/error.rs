//! Error types for the kassabon-core library.

use thiserror::Error;

/// Main error type for the kassabon library.
///
/// The parser itself is total and never fails; errors exist only at the
/// edges: the text-recognition boundary and configuration files.
#[derive(Error, Debug)]
pub enum KassabonError {
    /// Text-recognition boundary error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors at the text-recognition boundary.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition service returned no usable text.
    #[error("no text detected in image")]
    NoText,

    /// The recognition call itself failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Result type for the kassabon library.
pub type Result<T> = std::result::Result<T, KassabonError>;
