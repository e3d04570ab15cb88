/*! Commentary transformers.

Transforms take ownership of a commentary string and either give it back
(possibly rewritten) or return `None`, the discard sentinel.

!*/
pub mod eval_comments;
mod transform;

pub use eval_comments::CleanEvalComments;
pub use transform::Transform;
