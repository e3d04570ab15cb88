//! whatlang identifier
use ::whatlang::{detect, Lang};

use super::{Detection, Identifier};

/// Statistical identifier backed by the whatlang trigram model.
///
/// whatlang returns its best guess over the whole language set; we only care
/// whether that guess is English. Inputs it cannot score at all (empty text,
/// no recognizable script) come back [Detection::Unclassifiable].
#[derive(Debug, Default, Clone, Copy)]
pub struct Whatlang;

impl Identifier for Whatlang {
    fn identify(&self, text: &str) -> Detection {
        match detect(text) {
            Some(info) if info.lang() == Lang::Eng => Detection::English,
            Some(_) => Detection::NotEnglish,
            None => Detection::Unclassifiable,
        }
    }
}
