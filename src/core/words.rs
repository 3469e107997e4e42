//! Word list loading and normalization

use crate::error::{DictfillError, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Load raw lines from path (or stdin if "-")
pub fn load_word_list(path: &str) -> Result<Vec<String>> {
    if path == "-" {
        let stdin = std::io::stdin();
        return Ok(stdin.lock().lines().collect::<std::io::Result<Vec<_>>>()?);
    }

    let file = File::open(path).map_err(|e| DictfillError::FileNotFound {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| DictfillError::FileNotFound {
            path: path.to_string(),
            reason: e.to_string(),
        })
}

/// Normalize a single entry: trim surrounding whitespace and lowercase
#[inline]
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize and deduplicate raw lines
///
/// Blank lines are dropped; the first occurrence of each word decides its
/// position in the result.
pub fn normalize_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for line in lines {
        let word = normalize_word(line.as_ref());
        if word.is_empty() || seen.contains(&word) {
            continue;
        }
        seen.insert(word.clone());
        words.push(word);
    }

    words
}
