//! Low-value evaluation/arrow comment detection.
//!
//! Annotation tools inject `[%eval ...]` tags and directional arrows into
//! study comments. A comment that is *only* such an annotation (optionally
//! with the templated "Inaccuracy/Blunder/Mistake. X was best." sentence)
//! carries no authored insight.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Ordered pattern cascade. Each pattern must match the whole (trimmed)
    /// comment for it to count as low-value.
    static ref LOW_VALUE_PATTERNS: Vec<Regex> = vec![
        // "[%eval X] Inaccuracy. Y was best."
        Regex::new(r"^\[%eval\s+[+-]?\d+\.?\d*\]\s*(Inaccuracy|Blunder|Mistake)\.\s+\w+\d?\s+was\s+best\.*\s*$")
            .unwrap(),
        // "Inaccuracy. X was best. [%eval Y]"
        Regex::new(r"^(Inaccuracy|Blunder|Mistake)\.\s+\w+\d?\s+was\s+best\.\s*\[%eval\s+[+-]?\d+\.?\d*\]\s*$")
            .unwrap(),
        // bare "[%eval X]"
        Regex::new(r"^\[%eval\s+[+-]?\d+\.?\d*\]\s*$").unwrap(),
        // arrow-only, "→ e5"
        Regex::new(r"^→\s*\w+\s*$").unwrap(),
        // short arrow variations
        Regex::new(r"^[^→]{0,10}→[^→]{0,10}$").unwrap(),
    ];
}

/// Detects comments that are only an evaluation or arrow annotation.
#[derive(Default)]
pub struct LowValue;

impl LowValue {
    /// Returns `true` if `commentary` is a zero-information annotation.
    pub fn detect(&self, commentary: &str) -> bool {
        if commentary.is_empty() {
            return true;
        }

        let text = commentary.trim();
        LOW_VALUE_PATTERNS.iter().any(|p| p.is_match(text))
    }
}
