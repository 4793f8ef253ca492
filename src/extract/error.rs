use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from the PDF text-extraction boundary. All variants are fatal to
/// the run and surface to the caller unchanged.
pub enum ExtractionError {
    /// The input file does not exist.
    #[error("report file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be parsed as a PDF.
    #[error("failed to parse '{path}': {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// Parsing succeeded but produced no extractable text.
    #[error("no text could be extracted from '{path}'")]
    EmptyText { path: PathBuf },
}
