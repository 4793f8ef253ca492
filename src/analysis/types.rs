use serde::Serialize;

use crate::scoring::SimilarityResult;

/// Outcome of the reasoning-service branch of an analysis run.
///
/// A failed or timed-out service call degrades to [`Critique::Unavailable`]
/// with the failure reason preserved; an empty string never stands in for
/// "unknown".
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Critique {
    Available {
        /// Raw natural-language critique as returned by the service.
        text: String,
        /// Best-effort 0-100 rating extracted from the critique prose.
        reliability_signal: Option<u8>,
    },
    Unavailable {
        reason: String,
    },
}

impl Critique {
    pub fn is_available(&self) -> bool {
        matches!(self, Critique::Available { .. })
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Critique::Available { text, .. } => Some(text),
            Critique::Unavailable { .. } => None,
        }
    }

    pub fn reliability_signal(&self) -> Option<u8> {
        match self {
            Critique::Available {
                reliability_signal, ..
            } => *reliability_signal,
            Critique::Unavailable { .. } => None,
        }
    }
}

/// Aggregate result of one analysis run. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub critique: Critique,

    /// Best similarity match against the reference corpus.
    pub similarity: SimilarityResult,

    /// `true` when the best similarity score exceeds
    /// [`HIGH_SIMILARITY_THRESHOLD`](super::HIGH_SIMILARITY_THRESHOLD).
    pub flagged: bool,
}
