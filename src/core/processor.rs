//! Incremental lookup loop
//!
//! Walks the normalized word list once, looking up every word the cache does
//! not know yet, and checkpoints the cache to disk as new definitions arrive.

use crate::cache::DefinitionCache;
use crate::config::Config;
use crate::lookup::DefinitionSource;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Counters for a single run
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    /// Unique normalized words in the list
    pub total_words: usize,
    /// Words that already had a definition when the run started
    pub already_cached: usize,
    /// Definitions fetched and added this run
    pub new_definitions: usize,
    /// Lookups that produced no definition
    pub failed: usize,
    /// Missing words left for a later run because of the fetch limit
    pub deferred: usize,
    /// Checkpoints written during the loop (the final save is not counted)
    pub checkpoints: usize,
    /// Wall time spent in the loop
    pub elapsed: Duration,
}

impl RunStats {
    /// New definitions per minute, if any were fetched
    pub fn rate_per_minute(&self) -> Option<f64> {
        definitions_per_minute(self.new_definitions, self.elapsed)
    }
}

fn definitions_per_minute(count: usize, elapsed: Duration) -> Option<f64> {
    let secs = elapsed.as_secs_f64();
    if count == 0 || secs <= 0.0 {
        return None;
    }
    Some(count as f64 * 60.0 / secs)
}

/// Words from `words` with no cached definition, in list order
pub fn pending_words<'a>(words: &'a [String], cache: &DefinitionCache) -> Vec<&'a str> {
    words
        .iter()
        .filter(|w| !cache.contains(w))
        .map(String::as_str)
        .collect()
}

/// Look up every uncached word and merge the results into `cache`
///
/// Each missing word gets exactly one lookup, followed by the configured
/// pause. Failed lookups leave the word out of the cache. After every
/// `checkpoint_interval` new definitions the cache is saved; a failed save is
/// logged and the loop carries on.
pub fn process_words(
    words: &[String],
    cache: &mut DefinitionCache,
    source: &impl DefinitionSource,
    config: &Config,
) -> RunStats {
    let start = Instant::now();
    let limit = config.effective_fetch_limit();
    let to_fetch = pending_words(words, cache).len().min(limit);

    let mut stats = RunStats {
        total_words: words.len(),
        ..RunStats::default()
    };
    let mut attempts = 0usize;

    for word in words {
        if cache.contains(word) {
            stats.already_cached += 1;
            continue;
        }
        if attempts >= limit {
            stats.deferred += 1;
            continue;
        }
        attempts += 1;

        info!("[{}/{}] Looking up '{}'", attempts, to_fetch, word);
        match source.fetch(word) {
            Some(record) => {
                cache.insert(word.clone(), record);
                stats.new_definitions += 1;
                info!("Cached definition for '{}'", word);

                if config.checkpoint_interval > 0
                    && stats.new_definitions % config.checkpoint_interval == 0
                {
                    checkpoint(cache, &mut stats, start);
                }
            }
            None => {
                stats.failed += 1;
                info!("No definition found for '{}'", word);
            }
        }

        if !config.delay.is_zero() {
            std::thread::sleep(config.delay);
        }
    }

    stats.elapsed = start.elapsed();
    stats
}

fn checkpoint(cache: &mut DefinitionCache, stats: &mut RunStats, start: Instant) {
    match cache.save() {
        Ok(saved) => {
            stats.checkpoints += 1;
            let rate = definitions_per_minute(stats.new_definitions, start.elapsed());
            info!(
                "Checkpoint: saved {} entries, {} new so far ({:.1} definitions/min)",
                saved,
                stats.new_definitions,
                rate.unwrap_or(0.0)
            );
        }
        Err(e) => warn!("Checkpoint failed: {}", e),
    }
}
