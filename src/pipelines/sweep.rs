//! Artifact sweep over an already-cleaned corpus.
//!
//! The quality gate keeps substantive comments even when an annotation tag is
//! still embedded in them. This second pass produces the final
//! natural-commentary corpus by dropping those rows entirely.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::filtering::{ArtifactFree, Filter};
use crate::io::{reader, writer};

use super::pipeline::Pipeline;

pub struct SweepPipeline {
    src: PathBuf,
    dst: PathBuf,
}

impl SweepPipeline {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }
}

impl Pipeline<(usize, usize)> for SweepPipeline {
    fn version() -> &'static str {
        "0.2.0"
    }

    /// Returns (rows read, rows kept).
    fn run(&self) -> Result<(usize, usize), Error> {
        let records = reader::read_cleaned(&self.src)?;
        let initial = records.len();
        info!("initial row count: {}", initial);

        let filter = ArtifactFree::default();
        let records: Vec<_> = records
            .into_iter()
            .filter(|r| filter.detect(&r.output))
            .collect();

        info!(
            "rows containing annotation artifacts: {}",
            initial - records.len()
        );

        writer::write_cleaned(&self.dst, &records)?;
        info!("filtered dataset saved to {:?}", self.dst);

        Ok((initial, records.len()))
    }
}
