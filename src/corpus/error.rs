use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while building or loading a reference corpus.
pub enum CorpusError {
    /// A reference document was supplied with no raw text.
    #[error("reference document '{id}' has empty text")]
    EmptyDocument { id: String },

    /// Directory read or file read failed.
    #[error("failed to read corpus from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus directory contained no usable documents.
    #[error("no reference documents found in '{path}'")]
    NoDocuments { path: PathBuf },
}
