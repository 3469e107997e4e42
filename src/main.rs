//! dictfill - word list normalizer with a dictionary definition cache
//!
//! Normalizes and deduplicates a word list, looks up definitions for words
//! the local cache does not know yet, and saves both the cache and the
//! cleaned list.

mod cache;
mod cli;
mod config;
mod core;
mod error;
mod export;
mod logging;
mod lookup;
mod prompt;

use cache::DefinitionCache;
use clap::Parser;
use cli::Cli;
use crate::core::{load_word_list, normalize_words, pending_words, process_words};
use export::{get_output_writer, log_summary, write_word_list};
use lookup::DictionaryClient;
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    // Parse command line arguments
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    // Convert to config
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 1: Load and normalize the word list ===
    let raw_lines = match load_word_list(&config.input_filename) {
        Ok(lines) => lines,
        Err(e) => {
            error!("{}", e);
            return ExitCode::from(2);
        }
    };
    let words = normalize_words(&raw_lines);
    info!(
        "Read {} lines, {} unique words",
        raw_lines.len(),
        words.len()
    );

    // === Phase 2: Load cache ===
    let mut cache = DefinitionCache::load(&config.cache_path);

    // === Phase 3: Work out what needs a lookup ===
    let missing = pending_words(&words, &cache).len();
    let to_fetch = missing.min(config.effective_fetch_limit());
    info!(
        "{} words already cached, {} need a lookup",
        words.len() - missing,
        missing
    );
    if to_fetch < missing {
        info!("Limiting this run to {} lookups", to_fetch);
    }

    let client = match DictionaryClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            error!("Cannot create lookup client: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 4: Confirm large batches ===
    if config.needs_confirmation(to_fetch) {
        if config.reads_list_from_stdin() {
            error!(
                "{} words need a lookup but the list was read from stdin, so the \
                 confirmation prompt cannot be answered; rerun with --yes or raise \
                 --confirm-threshold",
                to_fetch
            );
            return ExitCode::from(2);
        }
        let question = format!(
            "About to look up {} words (at least {:.0}s with pacing). Continue?",
            to_fetch,
            config.delay.as_secs_f64() * to_fetch as f64
        );
        let stdin = std::io::stdin();
        let accepted = prompt::confirm(&question, &mut stdin.lock(), &mut std::io::stderr());
        if !accepted {
            info!("Aborted by user; no files were changed");
            return ExitCode::SUCCESS;
        }
    }

    // === Phase 5: Fetch missing definitions ===
    let stats = process_words(&words, &mut cache, &client, &config);

    // === Phase 6: Save cache and word list ===
    match cache.save() {
        Ok(saved) => info!(
            "Saved {} definitions to '{}'",
            saved,
            cache.path().display()
        ),
        Err(e) => warn!("Failed to save cache: {}", e),
    }

    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            error!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = write_word_list(&words, &mut *writer) {
        error!("Error writing output: {}", e);
        return ExitCode::from(2);
    }
    if config.output_filename != "-" {
        info!(
            "Saved {} words to '{}'",
            words.len(),
            config.output_filename
        );
    }

    // === Phase 7: Summary ===
    log_summary(&stats, cache.len());

    ExitCode::SUCCESS
}
