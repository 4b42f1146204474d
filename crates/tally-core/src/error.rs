//! Error types for the tally-core library.
//!
//! Only the text adapters and configuration loading are fallible. The
//! numeric engine never errors: tokens that cannot be normalized are dropped
//! from the result set, and an empty input yields an empty result.

use thiserror::Error;

/// Main error type for the tally library.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Text extraction error from a format adapter.
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the per-format text adapters.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The file extension maps to no known adapter.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Failed to parse the document container.
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// Failed to pull text out of a parsed document.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The document is encrypted and cannot be processed.
    #[error("document is encrypted")]
    Encrypted,

    /// OCR engine failure (model load, image decode, or inference).
    #[error("OCR failed: {0}")]
    Ocr(String),
}

/// Result type for the tally library.
pub type Result<T> = std::result::Result<T, TallyError>;
