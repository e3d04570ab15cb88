/*! Filtering utilities

Filters operate on commentary strings and are pure: two successive equal
inputs give two equal outputs.

Filters implement [filter::Filter], where `detect` returns `true` when the
item should be *kept*. Detectors that flag noise ([autogen::AutoGenerated],
[lowvalue::LowValue]) expose their own `detect` returning `true` on a match,
and the pipeline negates them.
! */
mod artifacts;
mod autogen;
mod english_markers;
mod filter;
mod lowvalue;

pub use artifacts::ArtifactFree;
pub use autogen::AutoGenerated;
pub use english_markers::EnglishMarkers;
pub use filter::Filter;
pub use lowvalue::LowValue;
