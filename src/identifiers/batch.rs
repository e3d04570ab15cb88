/*! Batched, bounded-concurrency language detection

Two-tier design to bound expensive classification work:
- every text goes through the cheap [EnglishMarkers] filter first;
- only the surviving candidates reach the statistical [Identifier], in
  fixed-size batches classified on a worker pool of fixed width.

Results are gathered into a pre-allocated buffer slot per input index, so the
output order always matches the input order regardless of how the pool
schedules work. Batches are sequential: peak concurrency stays at the pool
width and memory at one batch of texts.
!*/
use log::{debug, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::Error;
use crate::filtering::{EnglishMarkers, Filter};

use super::Identifier;

pub const DEFAULT_BATCH_SIZE: usize = 1000;
pub const DEFAULT_WORKERS: usize = 4;

pub struct BatchDetection {
    batch_size: usize,
    workers: usize,
    markers: EnglishMarkers,
}

impl BatchDetection {
    pub fn new(batch_size: usize, workers: usize) -> Self {
        Self {
            // chunks() panics on zero, and rayon would pick its own pool size
            batch_size: batch_size.max(1),
            workers: workers.max(1),
            markers: EnglishMarkers::default(),
        }
    }

    /// Get a reference to the detection's batch size.
    pub fn batch_size(&self) -> &usize {
        &self.batch_size
    }

    /// Get a reference to the detection's worker count.
    pub fn workers(&self) -> &usize {
        &self.workers
    }

    /// Classify `texts` as English/not English.
    ///
    /// The returned vector is index-aligned with `texts`: entry `i` is the
    /// classification of `texts[i]`. Texts rejected by the preliminary filter
    /// are `false` without ever reaching `identifier`.
    pub fn classify<I>(&self, identifier: &I, texts: &[&str]) -> Result<Vec<bool>, Error>
    where
        I: Identifier + Sync,
    {
        let mut results = vec![false; texts.len()];

        // tier 1: cheap lexical shortlist
        let candidates: Vec<(usize, &str)> = texts
            .iter()
            .enumerate()
            .filter(|(_, text)| self.markers.detect(text))
            .map(|(idx, text)| (idx, *text))
            .collect();

        info!(
            "preliminary filtering: {} out of {} need detailed check",
            candidates.len(),
            texts.len()
        );

        if candidates.is_empty() {
            return Ok(results);
        }

        // tier 2: statistical detection on a bounded pool
        let pool = ThreadPoolBuilder::new().num_threads(self.workers).build()?;
        let nb_batches = (candidates.len() - 1) / self.batch_size + 1;

        for (nb, batch) in candidates.chunks(self.batch_size).enumerate() {
            debug!("processing batch {}/{}", nb + 1, nb_batches);

            // par_iter + collect preserves input order inside the batch
            let detections: Vec<bool> = pool.install(|| {
                batch
                    .par_iter()
                    .map(|(_, text)| identifier.identify(text).is_english())
                    .collect()
            });

            for ((idx, _), is_english) in batch.iter().zip(detections) {
                results[*idx] = is_english;
            }
        }

        Ok(results)
    }
}

impl Default for BatchDetection {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, DEFAULT_WORKERS)
    }
}
