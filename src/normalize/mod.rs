//! Text normalization for similarity comparison.
//!
//! Raw report text (PDF extraction output, reference documents) is reduced to
//! a lowercase, ASCII-alphanumeric, stop-word-free token stream before
//! vectorization. Token order beyond adjacency carries no meaning for the
//! scorer; the joined form is a bag-of-words representation.

pub mod stopwords;


pub use stopwords::StopWords;

/// Converts raw text into a normalized token stream.
///
/// Rules, applied in order: lowercase; strip every character that is not an
/// ASCII letter, ASCII digit, or whitespace; split on whitespace; drop stop
/// words. Deterministic for a given input and stop-word set, no side effects.
///
/// # Lossy ASCII filtering
///
/// Non-ASCII characters are dropped entirely, so technical terms degrade:
/// "CO₂" loses the subscript and normalizes to "co". This affects similarity
/// scoring of documents that rely on such terms and is accepted behavior.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stop_words: StopWords,
}

impl TextNormalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Returns the normalized token sequence. Empty input yields an empty
    /// sequence, never an error.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Returns the normalized tokens joined by single spaces.
    pub fn normalize(&self, text: &str) -> String {
        self.tokens(text).join(" ")
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}
