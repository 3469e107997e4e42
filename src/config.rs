//! Configuration types for dictfill

use std::path::PathBuf;
use std::time::Duration;

/// Default dictionary endpoint; the word is appended as the last path segment
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Configuration options for a dictfill run
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the raw word list (or "-" for stdin)
    pub input_filename: String,

    /// Path to the normalized word list output (or "-" for stdout)
    pub output_filename: String,

    /// Path to the persisted definition cache
    pub cache_path: PathBuf,

    /// Base URL of the lookup service
    pub base_url: String,

    /// Per-request timeout for a single lookup
    pub timeout: Duration,

    /// Pause after every lookup, successful or not
    pub delay: Duration,

    /// Persist the cache after this many new definitions (0 = only at the end)
    pub checkpoint_interval: usize,

    /// Ask before fetching when more than this many words are missing
    pub confirm_threshold: usize,

    /// Skip the confirmation prompt
    pub assume_yes: bool,

    /// Maximum number of lookups this run (0 = no limit)
    pub fetch_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_filename: String::from("words.txt"),
            output_filename: String::from("processed.txt"),
            cache_path: PathBuf::from("dictionary.json"),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(10),
            delay: Duration::from_millis(500),
            checkpoint_interval: 10,
            confirm_threshold: 100,
            assume_yes: false,
            fetch_limit: 0,
        }
    }
}

impl Config {
    /// Returns the effective number of lookups allowed this run
    /// If fetch_limit is 0, returns usize::MAX (no limit)
    pub fn effective_fetch_limit(&self) -> usize {
        if self.fetch_limit == 0 {
            usize::MAX
        } else {
            self.fetch_limit
        }
    }

    /// Whether `pending` missing words require operator confirmation
    pub fn needs_confirmation(&self, pending: usize) -> bool {
        !self.assume_yes && pending > self.confirm_threshold
    }

    /// Whether the word list is read from stdin, leaving nothing to answer a prompt
    pub fn reads_list_from_stdin(&self) -> bool {
        self.input_filename == "-"
    }
}
