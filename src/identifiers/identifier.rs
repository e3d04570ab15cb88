/*! Identifier trait

All identifiers should implement [Identifier] to be useable in the pipeline.
!*/
use super::Detection;

pub trait Identifier {
    /// Classify a text. Must not panic on arbitrary input; anything the
    /// detector cannot handle is [Detection::Unclassifiable].
    fn identify(&self, text: &str) -> Detection;
}
