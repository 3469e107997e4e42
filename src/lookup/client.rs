//! HTTP client for the remote dictionary service

use crate::config::Config;
use crate::core::DefinitionRecord;
use crate::error::{DictfillError, Result};
use crate::lookup::response::{extract_record, ApiEntry};
use crate::lookup::DefinitionSource;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

/// Blocking client that performs one request per word
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: Url,
}

impl DictionaryClient {
    /// Build a client from the run configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(&config.base_url, config.timeout)
    }

    /// Build a client for `base_url` with a per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DictfillError::InvalidConfig(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DictfillError::InvalidConfig(format!(
                "base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL for looking up `word`; the word becomes one percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }

    /// Look up `word`, reporting why no definition was obtained
    pub fn lookup(&self, word: &str) -> Result<DefinitionRecord> {
        let url = self.entry_url(word);
        debug!(%url, "sending lookup request");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(DictfillError::Status(status.as_u16()));
        }

        let entries: Vec<ApiEntry> = response.json()?;
        extract_record(&entries)
    }
}

impl DefinitionSource for DictionaryClient {
    fn fetch(&self, word: &str) -> Option<DefinitionRecord> {
        match self.lookup(word) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(word, error = %e, "lookup yielded no definition");
                None
            }
        }
    }
}
