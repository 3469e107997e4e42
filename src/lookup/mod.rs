//! Definition lookups against a remote dictionary service

mod client;
mod response;

use crate::core::DefinitionRecord;

pub use client::DictionaryClient;

/// Something that can produce a definition for a normalized word
///
/// A lookup is best effort: any failure is reported as `None` and the word
/// simply stays undefined for this run.
pub trait DefinitionSource {
    /// Perform exactly one lookup for `word`
    fn fetch(&self, word: &str) -> Option<DefinitionRecord>;
}
