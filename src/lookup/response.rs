//! Lookup service response shapes
//!
//! Every field is optional; anything absent falls back to an empty value and
//! the decision whether a definition is usable is made in [`extract_record`].

use crate::core::DefinitionRecord;
use crate::error::{DictfillError, Result};
use serde::Deserialize;

/// One dictionary entry as returned by the service
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiEntry {
    pub phonetic: Option<String>,
    pub meanings: Option<Vec<ApiMeaning>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiMeaning {
    pub part_of_speech: Option<String>,
    pub definitions: Option<Vec<ApiDefinition>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiDefinition {
    pub definition: Option<String>,
    pub example: Option<String>,
}

/// Pick the record to cache from a decoded response
///
/// Uses the first entry's first meaning that carries at least one
/// definition. Fails when there is no entry, no meaning or no definition.
pub fn extract_record(entries: &[ApiEntry]) -> Result<DefinitionRecord> {
    let entry = entries
        .first()
        .ok_or_else(|| DictfillError::UnexpectedResponse("empty entry list".to_string()))?;

    let meanings = entry.meanings.as_deref().unwrap_or_default();
    if meanings.is_empty() {
        return Err(DictfillError::UnexpectedResponse(
            "entry has no meanings".to_string(),
        ));
    }

    let (meaning, first) = meanings
        .iter()
        .find_map(|m| {
            m.definitions
                .as_deref()
                .and_then(|defs| defs.first())
                .map(|d| (m, d))
        })
        .ok_or_else(|| {
            DictfillError::UnexpectedResponse("no meaning has a definition".to_string())
        })?;

    Ok(DefinitionRecord {
        part_of_speech: meaning.part_of_speech.clone().unwrap_or_default(),
        definition: first.definition.clone().unwrap_or_default(),
        phonetic: entry.phonetic.clone().unwrap_or_default(),
        example: first.example.clone().unwrap_or_default(),
    })
}
