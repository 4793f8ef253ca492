//! Reference documents and the comparison corpus.

pub mod error;


pub use error::CorpusError;

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::normalize::TextNormalizer;

/// A named text blob: an extracted report or a known reference report.
///
/// Immutable once created; the normalized form is derived lazily and cached
/// on first use.
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    text: String,
    normalized: OnceLock<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            normalized: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the normalized (space-joined) form, computing it on first call.
    pub fn normalized(&self, normalizer: &TextNormalizer) -> &str {
        self.normalized
            .get_or_init(|| normalizer.normalize(&self.text))
    }
}

/// Ordered collection of reference documents for similarity comparison.
///
/// Entries are validated to have non-empty raw text at construction. An empty
/// collection is representable, but every comparison against one fails fast
/// with an input-validation error before any external call is made.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    documents: Vec<Document>,
}

/// Reference report bundled with the binary, used when no corpus directory is
/// configured.
pub const BUILTIN_REFERENCE_ID: &str = "known-report";

const BUILTIN_REFERENCE_TEXT: &str = "Company X is committed to sustainability by using \
eco-friendly packaging and reducing carbon emissions.";

impl ReferenceCorpus {
    /// Builds a corpus, rejecting documents with empty raw text.
    pub fn new(documents: Vec<Document>) -> Result<Self, CorpusError> {
        for doc in &documents {
            if doc.text.trim().is_empty() {
                return Err(CorpusError::EmptyDocument {
                    id: doc.id.clone(),
                });
            }
        }

        Ok(Self { documents })
    }

    /// Builds a corpus from `(id, text)` pairs.
    pub fn from_texts<I, S, T>(entries: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(id, text)| Document::new(id, text))
                .collect(),
        )
    }

    /// The single built-in reference report.
    pub fn builtin() -> Self {
        Self {
            documents: vec![Document::new(BUILTIN_REFERENCE_ID, BUILTIN_REFERENCE_TEXT)],
        }
    }

    /// Loads every `.txt` file in `dir` as a reference document, ordered by
    /// file name. The file stem becomes the document id.
    pub fn load_dir(dir: &Path) -> Result<Self, CorpusError> {
        let entries = fs::read_dir(dir).map_err(|source| CorpusError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs::read_to_string(&path).map_err(|source| CorpusError::Io {
                path: path.clone(),
                source,
            })?;

            let id = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());

            documents.push(Document::new(id, text));
        }

        if documents.is_empty() {
            return Err(CorpusError::NoDocuments {
                path: dir.to_path_buf(),
            });
        }

        Self::new(documents)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
