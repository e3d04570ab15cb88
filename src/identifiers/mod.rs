/*! Language identification

Holds an [Identifier] trait for implementing other detectors.

The current identifier used is [whatlang](https://github.com/greyblake/whatlang-rs),
wrapped by [batch::BatchDetection] which adds a cheap preliminary filter and
bounded-concurrency batch classification. !*/
pub mod batch;
pub(crate) mod identification;
pub(crate) mod identifier;
mod whatlang;

pub use batch::BatchDetection;
pub use identification::Detection;
pub use identifier::Identifier;
pub use whatlang::Whatlang;
