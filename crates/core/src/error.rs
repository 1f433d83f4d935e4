//! Error types for status-report extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during status-report extraction.
///
/// Structural problems in a document are never errors: every splitting
/// strategy falls through to the next and ends in fallback synthesis.
/// Only I/O-level and format-decode-level failures reach the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension is not in the supported set.
    #[error("Unsupported file type: {0}")]
    InputRejected(String),

    /// The spreadsheet library rejected the byte stream.
    #[error("Spreadsheet decode error: {0}")]
    SpreadsheetDecode(String),

    /// ZIP archive error (for DOCX).
    #[error("ZIP error: {0}")]
    Zip(String),

    /// XML parsing error (for DOCX).
    #[error("XML parsing error: {0}")]
    Xml(String),
}
