//! Cleaning pipeline over scraped study records.
//!
//! # Processing
//! 1. Records with missing/empty commentary are dropped.
//! 1. Two-tier language filtering keeps English commentary only.
//! 1. Records whose commentary carries the "DVD" marketing artifact are dropped.
//! 1. Positions are validated and moves normalized to SAN; records whose
//!    position or move does not hold up are dropped.
//! 1. Auto-generated result strings are dropped.
//! 1. The remaining commentary goes through the quality gate, then gets
//!    whitespace-trimmed.
//!
//! Every stage narrows or transforms the record set; none re-introduces
//! discarded records. Survivor counts per stage are returned for diagnostics.
use std::path::PathBuf;

use log::info;

use crate::chess;
use crate::error::Error;
use crate::filtering::AutoGenerated;
use crate::identifiers::batch::{DEFAULT_BATCH_SIZE, DEFAULT_WORKERS};
use crate::identifiers::{BatchDetection, Identifier, Whatlang};
use crate::io::{reader, writer};
use crate::pipelines::pipeline::Pipeline;
use crate::transformers::eval_comments::{DEFAULT_ARROW_MIN, DEFAULT_MIN_LENGTH};
use crate::transformers::{CleanEvalComments, Transform};

use super::types::{CleanedRecord, RawRecord, ValidatedRecord};

/// Threshold configuration for one cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    /// language detection batch size
    pub batch_size: usize,
    /// language detection worker pool width
    pub workers: usize,
    /// minimum commentary length (measured without eval tags)
    pub min_length: usize,
    /// minimum length for commentary containing a directional arrow
    pub arrow_min: usize,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            workers: DEFAULT_WORKERS,
            min_length: DEFAULT_MIN_LENGTH,
            arrow_min: DEFAULT_ARROW_MIN,
        }
    }
}

/// Survivor count after each stage.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageCounts {
    pub initial: usize,
    pub with_commentary: usize,
    pub english: usize,
    pub without_marketing: usize,
    pub validated: usize,
    pub human_authored: usize,
    pub substantive: usize,
}

/// Run the full cleaning sequence over `records`.
///
/// Pure aside from logging: no io, identifier injected, so every stage is
/// testable in isolation and the whole run is reproducible.
pub fn clean<I>(
    records: Vec<RawRecord>,
    identifier: &I,
    config: &CleanConfig,
) -> Result<(Vec<CleanedRecord>, StageCounts), Error>
where
    I: Identifier + Sync,
{
    let mut counts = StageCounts {
        initial: records.len(),
        ..Default::default()
    };
    info!("initial record count: {}", counts.initial);

    // drop missing commentary
    let records: Vec<RawRecord> = records
        .into_iter()
        .filter(|r| r.commentary.as_deref().map_or(false, |c| !c.is_empty()))
        .collect();
    counts.with_commentary = records.len();
    info!("after removing empty commentary: {}", counts.with_commentary);

    // language filtering
    let detection = BatchDetection::new(config.batch_size, config.workers);
    let texts: Vec<&str> = records
        .iter()
        .map(|r| r.commentary.as_deref().unwrap_or(""))
        .collect();
    let english_mask = detection.classify(identifier, &texts)?;

    let records: Vec<RawRecord> = records
        .into_iter()
        .zip(english_mask)
        .filter_map(|(r, keep)| keep.then_some(r))
        .collect();
    counts.english = records.len();
    info!("after language filtering: {}", counts.english);

    // marketing artifact, removed unconditionally
    let records: Vec<RawRecord> = records
        .into_iter()
        .filter(|r| !r.commentary.as_deref().unwrap_or("").contains("DVD"))
        .collect();
    counts.without_marketing = records.len();
    info!("after DVD filter: {}", counts.without_marketing);

    // validate positions, normalize moves to SAN
    let records: Vec<ValidatedRecord> = records
        .into_iter()
        .filter_map(|r| {
            if !chess::validate_fen(&r.fen) {
                return None;
            }
            chess::uci_to_san(&r.fen, &r.uci).map(|san| ValidatedRecord::new(r, san))
        })
        .collect();
    counts.validated = records.len();
    info!(
        "after position validation and move conversion: {}",
        counts.validated
    );

    // drop auto-generated result strings
    let autogen = AutoGenerated::default();
    let records: Vec<ValidatedRecord> = records
        .into_iter()
        .filter(|r| !autogen.detect(r.commentary(), &r.raw().username))
        .collect();
    counts.human_authored = records.len();
    info!("after removing auto-generated: {}", counts.human_authored);

    // quality gate, then whitespace trim
    let cleaner = CleanEvalComments::new(config.min_length, config.arrow_min);
    let cleaned: Vec<CleanedRecord> = records
        .into_iter()
        .filter_map(|r| {
            let commentary = r.commentary().to_string();
            cleaner
                .transform_own(commentary)
                .map(|output| r.into_cleaned(output.trim().to_string()))
        })
        .collect();
    counts.substantive = cleaned.len();
    info!("after cleaning eval comments: {}", counts.substantive);

    Ok((cleaned, counts))
}

/// File-to-file cleaning: reads scraped records from a CSV, writes the
/// cleaned corpus as a fully-quoted CSV.
pub struct CommentaryPipeline {
    src: PathBuf,
    dst: PathBuf,
    config: CleanConfig,
}

impl CommentaryPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, config: CleanConfig) -> Self {
        Self { src, dst, config }
    }
}

impl Pipeline<StageCounts> for CommentaryPipeline {
    fn version() -> &'static str {
        "0.2.0"
    }

    fn run(&self) -> Result<StageCounts, Error> {
        let records = reader::read_raw(&self.src)?;
        if records.is_empty() {
            return Err(Error::Custom(format!(
                "no input records in {:?}",
                self.src
            )));
        }

        let (cleaned, counts) = clean(records, &Whatlang, &self.config)?;
        writer::write_cleaned(&self.dst, &cleaned)?;

        info!(
            "saved {} cleaned records to {:?}",
            counts.substantive, self.dst
        );
        Ok(counts)
    }
}
