//! PDF text extraction.
//!
//! The PDF binary format itself is an external concern handled by the
//! `pdf-extract` crate; this module adds the path checks and the distinction
//! between "file missing", "file unparseable", and "no extractable text"
//! that callers need for user-visible failure outcomes.

pub mod error;


pub use error::ExtractionError;

use std::path::Path;
use tracing::debug;

/// Extracts plain UTF-8 text from the PDF at `path`.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    if !path.exists() {
        return Err(ExtractionError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = pdf_extract::extract_text(path).map_err(|e| ExtractionError::ParseFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(ExtractionError::EmptyText {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), chars = text.len(), "extracted report text");
    Ok(text)
}
