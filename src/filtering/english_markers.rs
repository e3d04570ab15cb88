//! Preliminary language filter.
//!
//! Cheap lexical check used to short-list commentary for the statistical
//! detector: texts sharing at least [EnglishMarkers::min_matches] word tokens
//! with a fixed vocabulary of common English and chess words are considered
//! candidate-English.
use std::collections::HashSet;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use super::Filter;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();

    /// Common English function words plus chess vocabulary that annotators
    /// use regardless of writing style.
    static ref MARKERS: HashSet<&'static str> = [
        "the", "and", "is", "in", "to", "it", "that", "was", "for",
        "with", "now", "here", "this", "but", "piece", "move", "best",
        "king", "queen", "pawn", "knight", "bishop", "rook", "check",
        "mate", "position", "attack", "defend", "castle", "pin",
        "fork", "tactic", "strategy", "advantage", "better", "worse",
        "blunder", "mistake", "inaccuracy",
    ]
    .iter()
    .copied()
    .collect();
}

/// Candidate-English filter over the marker vocabulary.
///
/// Returns `true` (keep for detailed detection) iff the lowercased word-token
/// set of the text intersects the marker vocabulary in at least `min_matches`
/// distinct words.
pub struct EnglishMarkers {
    min_matches: usize,
}

impl EnglishMarkers {
    pub fn with_min_matches(min_matches: usize) -> Self {
        Self { min_matches }
    }

    /// Get a reference to the filter's match threshold.
    pub fn min_matches(&self) -> &usize {
        &self.min_matches
    }
}

impl Filter<&str> for EnglishMarkers {
    fn detect(&self, text: &str) -> bool {
        let text = text.to_lowercase();

        // distinct tokens only: a marker repeated ten times is one match
        let matches = WORD
            .find_iter(&text)
            .map(|m| m.as_str())
            .unique()
            .filter(|w| MARKERS.contains(*w))
            .count();
        matches >= self.min_matches
    }
}

impl Default for EnglishMarkers {
    /// Two distinct marker words make a text candidate-English.
    fn default() -> Self {
        EnglishMarkers { min_matches: 2 }
    }
}
