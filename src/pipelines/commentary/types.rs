//! Record types for the cleaning pipeline.
//!
//! Records only ever narrow as they move downstream:
//! [RawRecord] -> [ValidatedRecord] -> [CleanedRecord].
use serde::{Deserialize, Serialize};

/// One scraped study annotation, as produced by the scraping stage.
///
/// Immutable once read. `commentary` is optional because study exports can
/// carry empty comment cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(rename = "Study_ID")]
    pub study_id: String,
    #[serde(rename = "FEN")]
    pub fen: String,
    #[serde(rename = "Move")]
    pub uci: String,
    #[serde(rename = "Commentary")]
    pub commentary: Option<String>,
    #[serde(rename = "Username")]
    pub username: String,
}

/// A raw record whose position parsed and whose move proved legal.
///
/// `san` is non-empty by construction: it is only ever derived from a move
/// found in the legal-move set of the record's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    raw: RawRecord,
    san: String,
}

impl ValidatedRecord {
    pub fn new(raw: RawRecord, san: String) -> Self {
        Self { raw, san }
    }

    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    pub fn san(&self) -> &str {
        &self.san
    }

    pub fn commentary(&self) -> &str {
        self.raw.commentary.as_deref().unwrap_or("")
    }

    /// Consume the record, replacing its commentary with the cleaned output.
    pub fn into_cleaned(self, output: String) -> CleanedRecord {
        CleanedRecord {
            input: format!("{} {}", self.raw.fen, self.san),
            output,
            san: self.san,
        }
    }
}

/// The final training unit: position + move on the input side, commentary on
/// the output side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanedRecord {
    #[serde(rename = "Input")]
    pub input: String,
    #[serde(rename = "Output")]
    pub output: String,
    #[serde(rename = "SAN_Move")]
    pub san: String,
}
