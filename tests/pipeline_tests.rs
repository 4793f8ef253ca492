//! End-to-end pipeline tests with a mocked reasoning service.

use std::time::Duration;

use greenlens::analysis::{AnalysisError, ReportAnalyzer};
use greenlens::corpus::ReferenceCorpus;
use greenlens::normalize::{StopWords, TextNormalizer};
use greenlens::reasoning::{MockBehavior, MockReasoningClient};
use greenlens::scoring::SimilarityScorer;
use greenlens::{Critique, HIGH_SIMILARITY_THRESHOLD};

const REPORT: &str = "Company X reduces carbon emissions through eco-friendly packaging.";
const KNOWN_REPORT: &str = "Company X is committed to sustainability by using eco-friendly \
                            packaging and reducing carbon emissions.";

fn pipeline(mock: MockReasoningClient) -> ReportAnalyzer<MockReasoningClient> {
    let scorer = SimilarityScorer::new(TextNormalizer::new(StopWords::english()));
    ReportAnalyzer::new(scorer, mock)
}

#[tokio::test]
async fn overlapping_report_scores_high_but_below_flag_threshold() {
    let mock = MockReasoningClient::respond_with(
        "The report makes vague efficiency claims. Reliability rating: 55/100.",
    );
    let analyzer = pipeline(mock);
    let corpus = ReferenceCorpus::from_texts([("known-report", KNOWN_REPORT)]).unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();

    assert!(result.similarity.score > 0.4);
    assert!(result.similarity.score < HIGH_SIMILARITY_THRESHOLD);
    assert!(!result.flagged);
    assert_eq!(result.critique.reliability_signal(), Some(55));
    assert_eq!(analyzer.reasoning().call_count(), 1);
}

#[tokio::test]
async fn disjoint_vocabulary_scores_exactly_zero() {
    let mock = MockReasoningClient::respond_with("No overlap to speak of.");
    let analyzer = pipeline(mock);
    let corpus =
        ReferenceCorpus::from_texts([("unrelated", "quarterly revenue grew sharply")]).unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();

    assert_eq!(result.similarity.score, 0.0);
    assert!(!result.flagged);
}

#[tokio::test]
async fn copied_report_raises_warning_flag() {
    let mock = MockReasoningClient::respond_with("This text appears verbatim elsewhere.");
    let analyzer = pipeline(mock);
    let corpus = ReferenceCorpus::from_texts([
        ("unrelated", "quarterly revenue grew sharply"),
        ("copied-source", REPORT),
    ])
    .unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();

    assert_eq!(result.similarity.reference_id, "copied-source");
    assert!(result.flagged);
}

#[tokio::test]
async fn reasoning_outage_degrades_without_escaping() {
    let analyzer = pipeline(MockReasoningClient::new(MockBehavior::Unreachable));
    let corpus = ReferenceCorpus::from_texts([("known-report", KNOWN_REPORT)]).unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();

    assert!(matches!(result.critique, Critique::Unavailable { .. }));
    assert_eq!(result.similarity.reference_id, "known-report");
    assert!(!result.flagged);
}

#[tokio::test]
async fn reasoning_timeout_degrades_without_escaping() {
    let mock = MockReasoningClient::respond_after(Duration::from_secs(10), "too late");
    let analyzer = pipeline(mock).with_reasoning_timeout(Duration::from_millis(20));
    let corpus = ReferenceCorpus::from_texts([("copied-source", REPORT)]).unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();

    // The flag is still computed from similarity alone.
    assert!(result.flagged);
    match result.critique {
        Critique::Unavailable { reason } => assert!(reason.contains("timed out")),
        other => panic!("expected unavailable critique, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_corpus_fails_fast_with_zero_reasoning_calls() {
    let mock = MockReasoningClient::respond_with("never called");
    let analyzer = pipeline(mock);
    let empty = ReferenceCorpus::new(Vec::new()).unwrap();

    let result = analyzer.analyze(REPORT, &empty).await;

    assert!(matches!(result, Err(AnalysisError::InvalidInput { .. })));
    assert_eq!(analyzer.reasoning().call_count(), 0);
}

#[tokio::test]
async fn result_serializes_for_downstream_consumers() {
    let mock = MockReasoningClient::respond_with("Reliability rating: 64/100.");
    let analyzer = pipeline(mock);
    let corpus = ReferenceCorpus::from_texts([("known-report", KNOWN_REPORT)]).unwrap();

    let result = analyzer.analyze(REPORT, &corpus).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["critique"]["status"], "available");
    assert_eq!(json["critique"]["reliability_signal"], 64);
    assert_eq!(json["similarity"]["reference_id"], "known-report");
    assert_eq!(json["flagged"], false);
}
