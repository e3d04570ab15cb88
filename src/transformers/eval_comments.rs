//! Length/information-density gate for evaluation-tagged comments.
//!
//! `[%eval ...]` substrings are stripped only to *measure* the comment; the
//! persisted text is always the original. A comment passes if its measurement
//! string is long enough, with an extra-strict threshold when it carries a
//! directional arrow. Comments containing a "valuable" chess term go through
//! their own branch; both branches currently share the same threshold (kept
//! as-is, see the tests).
use lazy_static::lazy_static;
use regex::Regex;

use crate::filtering::LowValue;

use super::Transform;

pub const DEFAULT_MIN_LENGTH: usize = 63;
pub const DEFAULT_ARROW_MIN: usize = 80;

lazy_static! {
    static ref EVAL_TAG: Regex = Regex::new(r"\[%eval\s+[+-]?\d+\.?\d*\]").unwrap();
}

/// Terms whose presence marks a comment as carrying chess content worth
/// keeping even when it is on the short side.
const VALUABLE_TERMS: [&str; 6] = [
    "blunder",
    "inaccuracy",
    "mistake",
    "tactical",
    "positional",
    "advantage",
];

pub struct CleanEvalComments {
    min_length: usize,
    arrow_min: usize,
    lowvalue: LowValue,
}

impl CleanEvalComments {
    pub fn new(min_length: usize, arrow_min: usize) -> Self {
        Self {
            min_length,
            arrow_min,
            lowvalue: LowValue::default(),
        }
    }

    /// Get a reference to the gate's minimum length.
    pub fn min_length(&self) -> &usize {
        &self.min_length
    }

    /// Get a reference to the gate's arrow threshold.
    pub fn arrow_min(&self) -> &usize {
        &self.arrow_min
    }
}

impl Transform for CleanEvalComments {
    fn transform_own(&self, commentary: String) -> Option<String> {
        if self.lowvalue.detect(&commentary) {
            return None;
        }

        // eval tags are removed for measurement only
        let measured = EVAL_TAG.replace_all(&commentary, "").trim().to_string();
        let length = measured.chars().count();

        if measured.contains('→') && length <= self.arrow_min {
            return None;
        }

        let lower = measured.to_lowercase();
        let has_valuable = VALUABLE_TERMS.iter().any(|term| lower.contains(term));

        if has_valuable {
            if length <= self.min_length {
                return None;
            }
            return Some(commentary);
        }

        if length <= self.min_length {
            return None;
        }

        Some(commentary)
    }
}

impl Default for CleanEvalComments {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_ARROW_MIN)
    }
}
