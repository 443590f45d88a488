// src/lib.rs

//! Frequency-ranked prefix autocompletion over a case-folding ASCII trie.
//!
//! Words accumulate a frequency each time they are inserted; a query walks to
//! the prefix, lazily enumerates the subtree and keeps only the best `k`
//! completions in a bounded selector, ranked by descending frequency with
//! lexicographic tie-breaks. Single-threaded by design: `&mut self` writes
//! and `&self` reads are the whole concurrency story.

pub mod core;
pub mod ingest;

pub use crate::core::engine::SuggestEngine;
pub use crate::core::trie::Trie;
pub use crate::core::types::Suggestion;
