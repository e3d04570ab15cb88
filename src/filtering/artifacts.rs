//! Leftover annotation artifact detection.
//!
//! The quality gate keeps substantive comments even when they still embed an
//! annotation tag. The final corpus sweep drops those rows: a training target
//! should not teach the model to emit `[%cal ...]` markup.
use super::Filter;

/// Substrings that mark leftover annotation-tool markup.
const ARTIFACTS: [&str; 4] = ["[%csl", "[%cal", "[%eval", "→"];

/// Keeps text that carries no annotation artifact.
#[derive(Default)]
pub struct ArtifactFree;

impl Filter<&str> for ArtifactFree {
    fn detect(&self, text: &str) -> bool {
        !ARTIFACTS.iter().any(|a| text.contains(a))
    }
}
