//! CLI argument parsing using clap

use crate::config::{Config, DEFAULT_BASE_URL};
use crate::error::{DictfillError, Result};
use clap::Parser;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Word list normalizer with a dictionary definition cache
#[derive(Parser, Debug)]
#[command(name = "dictfill")]
#[command(version)]
#[command(
    about = "Normalize a word list and fill a local cache with dictionary definitions",
    long_about = None
)]
pub struct Cli {
    /// Raw word list, one word or phrase per line (use "-" for stdin)
    #[arg(value_name = "INPUT", default_value = "words.txt")]
    pub input: String,

    /// Output file for the normalized word list (use "-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "processed.txt")]
    pub output: String,

    /// Definition cache file
    #[arg(long = "cache", value_name = "PATH", default_value = "dictionary.json")]
    pub cache: PathBuf,

    /// Base URL of the lookup service
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Timeout for a single lookup, in seconds
    #[arg(long = "timeout-secs", value_name = "N", default_value = "10")]
    pub timeout_secs: u64,

    /// Pause after every lookup, in milliseconds
    #[arg(long = "delay-ms", value_name = "N", default_value = "500")]
    pub delay_ms: u64,

    /// Save the cache after every N new definitions (0 = only at the end)
    #[arg(long = "checkpoint-every", value_name = "N", default_value = "10")]
    pub checkpoint_every: usize,

    /// Ask for confirmation when more than N words need a lookup
    #[arg(long = "confirm-threshold", value_name = "N", default_value = "100")]
    pub confirm_threshold: usize,

    /// Do not ask for confirmation
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Look up at most N missing words this run
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if self.timeout_secs == 0 {
            return Err(DictfillError::InvalidConfig(
                "--timeout-secs must be greater than 0".to_string(),
            ));
        }

        let base_url = Url::parse(&self.base_url).map_err(|e| {
            DictfillError::InvalidConfig(format!("invalid --base-url '{}': {}", self.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DictfillError::InvalidConfig(format!(
                "--base-url '{}' cannot carry a path",
                self.base_url
            )));
        }

        Ok(Config {
            input_filename: self.input,
            output_filename: self.output,
            cache_path: self.cache,
            base_url: self.base_url,
            timeout: Duration::from_secs(self.timeout_secs),
            delay: Duration::from_millis(self.delay_ms),
            checkpoint_interval: self.checkpoint_every,
            confirm_threshold: self.confirm_threshold,
            assume_yes: self.yes,
            fetch_limit: self.limit.unwrap_or(0),
        })
    }
}
