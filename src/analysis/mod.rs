//! End-to-end report analysis: similarity scoring joined with the external
//! critique into one [`AnalysisResult`].

pub mod analyzer;
pub mod error;
pub mod types;


pub use analyzer::{DEFAULT_REASONING_TIMEOUT, ReportAnalyzer};
pub use error::AnalysisError;
pub use types::{AnalysisResult, Critique};

/// Best-match scores strictly above this are classified as high similarity
/// and raise the warning flag: the report may be misleading or copied.
pub const HIGH_SIMILARITY_THRESHOLD: f32 = 0.80;
