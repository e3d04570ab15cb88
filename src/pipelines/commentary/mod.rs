/*! Commentary cleaning pipeline

Takes scraped study records and narrows them down, stage by stage, to the
(position, move, commentary) triples worth training on.
!*/
#[allow(clippy::module_inception)]
mod pipeline;
pub mod types;

pub use pipeline::{clean, CleanConfig, CommentaryPipeline, StageCounts};
