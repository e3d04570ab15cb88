//! Transform trait.

pub trait Transform {
    /// Takes ownership of the commentary and returns it, or `None` to signal
    /// that the record should be discarded.
    fn transform_own(&self, commentary: String) -> Option<String>;
}
