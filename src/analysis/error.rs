use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty document text or empty reference corpus. Checked before any
    /// external call is attempted.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The similarity branch failed. A best-match score is essential output,
    /// so this aborts the run (unlike reasoning-service failures).
    #[error("similarity scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
