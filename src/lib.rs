//! Greenlens library crate (used by the CLI binary and integration tests).
//!
//! Report analysis pipeline for sustainability reports: extract text from a
//! PDF, normalize it, score it against a reference corpus of known reports,
//! and obtain a natural-language greenwashing critique from an external
//! reasoning service.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`ReportAnalyzer`], [`AnalysisResult`], [`Critique`] - end-to-end analysis
//! - [`HIGH_SIMILARITY_THRESHOLD`] - warning-flag cutoff
//!
//! ## Normalization & Scoring
//! - [`TextNormalizer`], [`StopWords`] - token stream preparation
//! - [`SimilarityScorer`], [`SimilarityResult`] - TF-IDF cosine similarity
//!
//! ## Reasoning Service
//! - [`ReasoningClient`], [`GenaiReasoningClient`] - external critique seam
//! - [`extract_reliability_rating`] - best-effort 0-100 signal extraction
//!
//! ## Inputs
//! - [`extract_text`](extract::extract_text) - PDF text extraction
//! - [`Document`], [`ReferenceCorpus`] - comparison corpus
//! - [`Config`] - environment-backed configuration
//!
//! ## Test/Mock Support
//! `MockReasoningClient` is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod extract;
pub mod normalize;
pub mod reasoning;
pub mod scoring;

pub use analysis::{
    AnalysisError, AnalysisResult, Critique, DEFAULT_REASONING_TIMEOUT,
    HIGH_SIMILARITY_THRESHOLD, ReportAnalyzer,
};
pub use config::{Config, ConfigError};
pub use corpus::{CorpusError, Document, ReferenceCorpus};
pub use extract::ExtractionError;
pub use normalize::{StopWords, TextNormalizer};
pub use reasoning::{
    GenaiReasoningClient, ReasoningClient, ReasoningError, extract_reliability_rating,
};
pub use scoring::{ScoringError, SimilarityResult, SimilarityScorer};

#[cfg(any(test, feature = "mock"))]
pub use reasoning::{MockBehavior, MockReasoningClient};
