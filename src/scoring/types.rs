use serde::Serialize;

/// Cosine similarity of an analyzed document against one reference document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    /// Identifier of the compared reference document.
    pub reference_id: String,

    /// Cosine similarity in `[0.0, 1.0]`. Never NaN; degenerate inputs error
    /// out before a result is produced.
    pub score: f32,
}

impl SimilarityResult {
    pub fn new(reference_id: impl Into<String>, score: f32) -> Self {
        Self {
            reference_id: reference_id.into(),
            score,
        }
    }
}
