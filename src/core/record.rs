//! Definition record stored per word

use serde::{Deserialize, Serialize};

/// Dictionary data kept for a single normalized word
///
/// Every field defaults to an empty string so partially filled cache entries
/// written by other tools still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefinitionRecord {
    /// Part of speech of the first meaning (e.g. "noun")
    pub part_of_speech: String,
    /// Text of the first definition
    pub definition: String,
    /// Phonetic spelling (e.g. "/ˈæp.əl/")
    pub phonetic: String,
    /// Example sentence of the first definition
    pub example: String,
}
