//! Persistent definition cache
//!
//! The cache maps normalized words to their definition records and is
//! stored as a single pretty-printed JSON file. It only ever grows: words are
//! added when a lookup succeeds and are never removed or rewritten.

mod storage;

pub use storage::DefinitionCache;
