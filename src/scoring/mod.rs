//! TF-IDF cosine similarity between normalized documents.
//!
//! # Per-call vector space
//!
//! IDF statistics are computed fresh over exactly the documents involved in a
//! single `score` / `score_against_corpus` call, never cached across calls.
//! This keeps calls independent (no cross-call vocabulary leakage) at the
//! cost of IDF weights only being meaningful relative to the compared set.
//! Sharing a fitted model across calls would change every score; do not
//! "optimize" this without re-validating the similarity semantics.

pub mod error;
pub mod types;

mod vectorizer;


pub use error::ScoringError;
pub use types::SimilarityResult;

use std::cmp::Ordering;
use tracing::debug;

use crate::corpus::ReferenceCorpus;
use crate::normalize::TextNormalizer;

/// Scores document similarity in `[0.0, 1.0]` via TF-IDF cosine similarity.
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    normalizer: TextNormalizer,
}

impl SimilarityScorer {
    pub fn new(normalizer: TextNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Cosine similarity of two raw documents, fit over exactly this pair.
    ///
    /// Fails with [`ScoringError::DegenerateInput`] when either side
    /// normalizes to an empty token sequence.
    pub fn score(&self, doc_a: &str, doc_b: &str) -> Result<f32, ScoringError> {
        let tokens_a = self.normalizer.tokens(doc_a);
        let tokens_b = self.normalizer.tokens(doc_b);

        if tokens_a.is_empty() {
            return Err(ScoringError::DegenerateInput {
                id: "doc_a".to_string(),
            });
        }
        if tokens_b.is_empty() {
            return Err(ScoringError::DegenerateInput {
                id: "doc_b".to_string(),
            });
        }

        let docs = [
            tokens_a.iter().map(String::as_str).collect::<Vec<_>>(),
            tokens_b.iter().map(String::as_str).collect::<Vec<_>>(),
        ];
        let rows = vectorizer::fit_transform(&docs);

        Ok(vectorizer::dot(&rows[0], &rows[1]).clamp(0.0, 1.0))
    }

    /// Scores a document against every corpus entry, fit jointly over the
    /// document plus the whole corpus, sorted by descending score.
    ///
    /// Fails with [`ScoringError::DegenerateInput`] when the document or any
    /// reference normalizes to an empty token sequence.
    pub fn score_against_corpus(
        &self,
        doc: &str,
        corpus: &ReferenceCorpus,
    ) -> Result<Vec<SimilarityResult>, ScoringError> {
        let query_tokens = self.normalizer.tokens(doc);
        if query_tokens.is_empty() {
            return Err(ScoringError::DegenerateInput {
                id: "document".to_string(),
            });
        }

        let mut docs: Vec<Vec<&str>> = Vec::with_capacity(corpus.len() + 1);
        docs.push(query_tokens.iter().map(String::as_str).collect());

        for reference in corpus.iter() {
            let normalized = reference.normalized(&self.normalizer);
            let tokens: Vec<&str> = normalized.split_whitespace().collect();
            if tokens.is_empty() {
                return Err(ScoringError::DegenerateInput {
                    id: reference.id().to_string(),
                });
            }
            docs.push(tokens);
        }

        let rows = vectorizer::fit_transform(&docs);
        let Some((query_row, reference_rows)) = rows.split_first() else {
            return Ok(Vec::new());
        };

        let mut results: Vec<SimilarityResult> = corpus
            .iter()
            .zip(reference_rows)
            .map(|(reference, row)| {
                let score = vectorizer::dot(query_row, row).clamp(0.0, 1.0);
                debug!(reference = reference.id(), score, "scored reference");
                SimilarityResult::new(reference.id(), score)
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ok(results)
    }
}
