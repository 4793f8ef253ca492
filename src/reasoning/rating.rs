//! Best-effort reliability-rating extraction from critique prose.
//!
//! The reasoning service is asked to state a 0-100 rating somewhere in its
//! free-text response, but nothing guarantees a parseable phrasing. Absence
//! yields `None` and never fails the call.

use regex::Regex;
use std::sync::LazyLock;

static RATING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // "82/100", "82 / 100", "82 out of 100"
        r"(?i)\b(\d{1,3})\s*(?:/\s*100|out of 100)\b",
        // "reliability rating: 82", "reliability score of 82", with the
        // "(0-100)" range echo from the prompt explicitly skipped
        r"(?i)reliability(?:\s+(?:rating|score))?\s*(?:\(0\s*-\s*100\))?\s*(?:is|of|:|=)?\s*(\d{1,3})\b",
        // "rating: 82", "score = 82"
        r"(?i)\b(?:rating|score)\s*(?:is|of|:|=)\s*(\d{1,3})\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("rating pattern compiles"))
    .collect()
});

/// Scans critique text for a 0-100 reliability rating. Returns the first
/// plausible match; out-of-range numbers are treated as absent.
pub fn extract_reliability_rating(text: &str) -> Option<u8> {
    for pattern in RATING_PATTERNS.iter() {
        for captures in pattern.captures_iter(text) {
            if let Some(value) = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                if value <= 100 {
                    return Some(value as u8);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_slash_hundred_form() {
        assert_eq!(
            extract_reliability_rating("Overall I would rate this report 62/100."),
            Some(62)
        );
        assert_eq!(
            extract_reliability_rating("This scores 45 out of 100 for credibility."),
            Some(45)
        );
    }

    #[test]
    fn test_extracts_labelled_forms() {
        assert_eq!(
            extract_reliability_rating("Reliability rating: 78. The claims are vague."),
            Some(78)
        );
        assert_eq!(
            extract_reliability_rating("I assign a reliability score of 30."),
            Some(30)
        );
        assert_eq!(
            extract_reliability_rating("Final rating: 91"),
            Some(91)
        );
    }

    #[test]
    fn test_skips_prompt_range_echo() {
        assert_eq!(
            extract_reliability_rating("Reliability rating (0-100): 55"),
            Some(55)
        );
    }

    #[test]
    fn test_absence_yields_none() {
        assert_eq!(
            extract_reliability_rating("The report is vague about supply-chain emissions."),
            None
        );
        assert_eq!(extract_reliability_rating(""), None);
    }

    #[test]
    fn test_out_of_range_is_treated_as_absent() {
        assert_eq!(extract_reliability_rating("rating: 250"), None);
    }

    #[test]
    fn test_boundary_values() {
        assert_eq!(extract_reliability_rating("reliability rating: 0"), Some(0));
        assert_eq!(
            extract_reliability_rating("reliability rating: 100"),
            Some(100)
        );
    }
}
