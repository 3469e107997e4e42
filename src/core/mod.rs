//! Core data structures and the lookup loop

pub mod processor;
pub mod record;
pub mod words;

pub use processor::{pending_words, process_words, RunStats};
pub use record::DefinitionRecord;
pub use words::{load_word_list, normalize_words};
