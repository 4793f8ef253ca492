use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A document normalized to an empty token sequence, so no vector exists
    /// for it. Raised instead of returning NaN or a silent 0.0.
    #[error("cannot score '{id}': no tokens remain after normalization")]
    DegenerateInput { id: String },
}
