//! Greenlens CLI entrypoint.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

use greenlens::analysis::ReportAnalyzer;
use greenlens::config::Config;
use greenlens::corpus::ReferenceCorpus;
use greenlens::normalize::{StopWords, TextNormalizer};
use greenlens::reasoning::GenaiReasoningClient;
use greenlens::scoring::SimilarityScorer;
use greenlens::{Critique, extract};

/// Report analyzed when no path argument is given.
const DEFAULT_REPORT_PATH: &str = "data.pdf";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let json_output = env::args().any(|arg| arg == "--json");
    let report_path: PathBuf = env::args()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string())
        .into();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(path = %report_path.display(), model = %config.model, "greenlens starting");

    let report_text = extract::extract_text(&report_path)?;

    let corpus = match &config.corpus_dir {
        Some(dir) => ReferenceCorpus::load_dir(dir)
            .with_context(|| format!("loading reference corpus from {}", dir.display()))?,
        None => ReferenceCorpus::builtin(),
    };
    tracing::info!(references = corpus.len(), "reference corpus loaded");

    let scorer = SimilarityScorer::new(TextNormalizer::new(StopWords::english()));
    let reasoning = GenaiReasoningClient::new(config.model.clone());
    let analyzer =
        ReportAnalyzer::new(scorer, reasoning).with_reasoning_timeout(config.reasoning_timeout());

    let result = analyzer.analyze(&report_text, &corpus).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&result, &report_path);
    Ok(())
}

fn print_summary(result: &greenlens::AnalysisResult, report_path: &Path) {
    println!("Report: {}", report_path.display());
    println!();

    match &result.critique {
        Critique::Available {
            text,
            reliability_signal,
        } => {
            println!("AI Analysis Result:");
            println!("{text}");
            if let Some(signal) = reliability_signal {
                println!();
                println!("Reliability signal: {signal}/100");
            }
        }
        Critique::Unavailable { reason } => {
            println!("AI critique unavailable: {reason}");
        }
    }

    println!();
    println!(
        "Report similarity score (vs. '{}'): {:.2}",
        result.similarity.reference_id, result.similarity.score
    );

    if result.flagged {
        println!("WARNING: high similarity detected. The report may be misleading or copied.");
    }
}
