//! Final run summary

use crate::core::RunStats;
use tracing::info;

/// Report the final counts for a completed run
pub fn log_summary(stats: &RunStats, cache_entries: usize) {
    info!("Total unique words: {}", stats.total_words);
    info!("Already cached: {}", stats.already_cached);
    info!("New definitions: {}", stats.new_definitions);
    if stats.failed > 0 {
        info!("No definition found: {}", stats.failed);
    }
    if stats.deferred > 0 {
        info!("Deferred by --limit: {}", stats.deferred);
    }
    if stats.checkpoints > 0 {
        info!("Checkpoints written: {}", stats.checkpoints);
    }
    info!("Cache now holds {} definitions", cache_entries);

    if let Some(rate) = stats.rate_per_minute() {
        info!(
            "Fetched {} definitions in {:.1}s ({:.1} definitions/min)",
            stats.new_definitions,
            stats.elapsed.as_secs_f64(),
            rate
        );
    }
}
