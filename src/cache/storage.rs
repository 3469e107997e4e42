//! Cache storage implementation

use crate::core::DefinitionRecord;
use crate::error::{DictfillError, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Persisted mapping from normalized word to its definition
///
/// Entries are only ever added; a word that already has a record keeps it.
#[derive(Debug)]
pub struct DefinitionCache {
    /// Location of the cache file
    path: PathBuf,
    /// Cached records, sorted by word
    entries: BTreeMap<String, DefinitionRecord>,
    /// The file on disk could not be parsed; copy it aside before replacing it
    backup_pending: bool,
}

impl DefinitionCache {
    /// Create an empty cache that will be saved to `path`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            backup_pending: false,
        }
    }

    /// Load the cache from `path`
    ///
    /// A missing or unparsable file yields an empty cache; the run carries on
    /// either way.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut cache = Self::empty(path);

        match read_entries(&cache.path) {
            Ok(Some(entries)) => {
                info!(
                    "Loaded {} cached definitions from '{}'",
                    entries.len(),
                    cache.path.display()
                );
                cache.entries = entries;
            }
            Ok(None) => {
                info!(
                    "No cache found at '{}', starting fresh",
                    cache.path.display()
                );
            }
            Err(e) => {
                warn!("{}; starting with an empty cache", e);
                cache.backup_pending = true;
            }
        }

        cache
    }

    /// Path of the cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unparsable cache file is copied before the first save
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".bak");
        self.path.with_file_name(name)
    }

    /// Number of cached words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no words
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` already has a definition
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Get the cached definition for `word`
    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<&DefinitionRecord> {
        self.entries.get(word)
    }

    /// Add a definition for a word that is not cached yet
    ///
    /// Returns false and leaves the existing record untouched when the word
    /// is already present.
    pub fn insert(&mut self, word: String, record: DefinitionRecord) -> bool {
        if self.entries.contains_key(&word) {
            return false;
        }
        self.entries.insert(word, record);
        true
    }

    /// Write the full cache to disk, replacing the previous file
    ///
    /// The new content goes to a temporary file in the same directory and is
    /// renamed over the old one only after it has been completely written.
    /// Returns the number of entries saved.
    pub fn save(&mut self) -> Result<usize> {
        if self.backup_pending && self.path.exists() {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|e| {
                DictfillError::CacheError(format!(
                    "Failed to back up unreadable cache '{}' to '{}': {}",
                    self.path.display(),
                    backup.display(),
                    e
                ))
            })?;
            warn!(
                "Unreadable cache copied to '{}' before overwriting",
                backup.display()
            );
        }
        self.backup_pending = false;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                DictfillError::CacheError(format!(
                    "Failed to create cache directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        let tmp = NamedTempFile::new_in(&dir).map_err(|e| {
            DictfillError::CacheError(format!(
                "Failed to create temporary cache file in '{}': {}",
                dir.display(),
                e
            ))
        })?;

        self.write_to(&tmp).map_err(|e| {
            DictfillError::CacheError(format!("Failed to write cache entries: {}", e))
        })?;

        tmp.persist(&self.path).map_err(|e| {
            DictfillError::CacheError(format!(
                "Failed to replace cache file '{}': {}",
                self.path.display(),
                e.error
            ))
        })?;

        debug!(
            "Saved {} entries to '{}'",
            self.entries.len(),
            self.path.display()
        );
        Ok(self.entries.len())
    }

    fn write_to(&self, tmp: &NamedTempFile) -> io::Result<()> {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        drop(writer);
        tmp.as_file().sync_all()
    }
}

/// Read cache entries from disk
///
/// Returns `Ok(None)` when the file does not exist. Words mapped to `null`
/// count as never fetched and are dropped.
fn read_entries(path: &Path) -> Result<Option<BTreeMap<String, DefinitionRecord>>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(DictfillError::CacheError(format!(
                "Failed to open cache '{}': {}",
                path.display(),
                e
            )))
        }
    };

    let raw: BTreeMap<String, Option<DefinitionRecord>> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DictfillError::CacheError(format!(
                "Failed to parse cache '{}': {}",
                path.display(),
                e
            ))
        })?;

    let total = raw.len();
    let entries: BTreeMap<_, _> = raw
        .into_iter()
        .filter_map(|(word, record)| record.map(|r| (word, r)))
        .collect();
    if entries.len() < total {
        debug!(
            "Ignored {} empty cache entries in '{}'",
            total - entries.len(),
            path.display()
        );
    }

    Ok(Some(entries))
}
