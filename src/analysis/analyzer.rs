use std::time::Duration;

use tokio::time::timeout;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::corpus::ReferenceCorpus;
use crate::reasoning::{ReasoningClient, extract_reliability_rating};
use crate::scoring::SimilarityScorer;

use super::HIGH_SIMILARITY_THRESHOLD;
use super::error::AnalysisError;
use super::types::{AnalysisResult, Critique};

/// Default ceiling on one reasoning-service round trip.
pub const DEFAULT_REASONING_TIMEOUT: Duration = Duration::from_secs(60);

/// End-to-end report analysis pipeline.
///
/// Composes the similarity scorer and the reasoning client into one
/// `analyze` call. The two branches share no state and run concurrently;
/// only the reasoning branch can block on the network, so it sits under a
/// caller-configurable timeout. Every invocation is a fresh, independent run
/// with no retries and no caching.
pub struct ReportAnalyzer<R: ReasoningClient> {
    scorer: SimilarityScorer,
    reasoning: R,
    reasoning_timeout: Duration,
}

impl<R: ReasoningClient> ReportAnalyzer<R> {
    pub fn new(scorer: SimilarityScorer, reasoning: R) -> Self {
        Self {
            scorer,
            reasoning,
            reasoning_timeout: DEFAULT_REASONING_TIMEOUT,
        }
    }

    pub fn with_reasoning_timeout(mut self, reasoning_timeout: Duration) -> Self {
        self.reasoning_timeout = reasoning_timeout;
        self
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    pub fn reasoning(&self) -> &R {
        &self.reasoning
    }

    /// Analyzes `document_text` against `corpus`.
    ///
    /// Preconditions (checked before any external call): non-empty document
    /// text, non-empty corpus. Reasoning-service failure or timeout degrades
    /// to [`Critique::Unavailable`] and never aborts the similarity branch;
    /// a degenerate similarity input aborts the run.
    pub async fn analyze(
        &self,
        document_text: &str,
        corpus: &ReferenceCorpus,
    ) -> Result<AnalysisResult, AnalysisError> {
        if document_text.trim().is_empty() {
            return Err(AnalysisError::InvalidInput {
                reason: "document text is empty".to_string(),
            });
        }
        if corpus.is_empty() {
            return Err(AnalysisError::InvalidInput {
                reason: "reference corpus is empty".to_string(),
            });
        }

        let run_id = Uuid::new_v4();
        debug!(
            %run_id,
            document_len = document_text.len(),
            corpus_len = corpus.len(),
            "starting analysis run"
        );

        let critique_branch = async {
            timeout(
                self.reasoning_timeout,
                self.reasoning.critique(document_text),
            )
            .await
        };
        let scoring_branch = async { self.scorer.score_against_corpus(document_text, corpus) };

        let (critique_outcome, matches) = tokio::join!(critique_branch, scoring_branch);

        let matches = matches?;
        let best = match matches.into_iter().next() {
            Some(best) => best,
            // Unreachable: the corpus was checked non-empty and the scorer
            // yields one result per reference.
            None => {
                return Err(AnalysisError::InvalidInput {
                    reason: "reference corpus is empty".to_string(),
                });
            }
        };

        let critique = match critique_outcome {
            Ok(Ok(text)) => {
                let reliability_signal = extract_reliability_rating(&text);
                Critique::Available {
                    text,
                    reliability_signal,
                }
            }
            Ok(Err(e)) => {
                warn!(%run_id, error = %e, "reasoning service failed, continuing without critique");
                Critique::Unavailable {
                    reason: e.to_string(),
                }
            }
            Err(_) => {
                warn!(
                    %run_id,
                    timeout_secs = self.reasoning_timeout.as_secs(),
                    "reasoning service timed out, continuing without critique"
                );
                Critique::Unavailable {
                    reason: format!(
                        "reasoning service timed out after {}s",
                        self.reasoning_timeout.as_secs()
                    ),
                }
            }
        };

        let flagged = best.score > HIGH_SIMILARITY_THRESHOLD;

        info!(
            %run_id,
            best_reference = %best.reference_id,
            score = best.score,
            flagged,
            critique_available = critique.is_available(),
            "analysis run complete"
        );

        Ok(AnalysisResult {
            critique,
            similarity: best,
            flagged,
        })
    }
}
