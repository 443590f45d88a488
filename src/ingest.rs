// File: src/ingest.rs
use crate::core::engine::SuggestEngine;
use crate::core::trie;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

/// Feeds one word per line into the engine. Trailing carriage returns are
/// stripped so CRLF sources work, blank lines are skipped, and words the trie
/// would reject are dropped here with a debug note. Returns how many words
/// were actually inserted.
pub fn load_words<R: BufRead>(engine: &mut SuggestEngine, reader: R) -> io::Result<usize> {
    let mut inserted = 0;
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            continue;
        }
        if !trie::is_supported_word(word) {
            debug!(word, "skipping word with unsupported characters");
            continue;
        }
        engine.insert(word);
        inserted += 1;
    }
    Ok(inserted)
}

/// Loads a baseline dictionary, one word per line, each line contributing a
/// frequency of 1.
pub fn load_dictionary(engine: &mut SuggestEngine, path: &Path) -> Result<usize, IngestError> {
    let words = load_file(engine, path)?;
    info!(words, path = %path.display(), "dictionary loaded");
    Ok(words)
}

/// Replays a usage history, one word per line, each line bumping that word's
/// frequency by 1. Same line format as the dictionary; only the intent
/// differs.
pub fn load_usage(engine: &mut SuggestEngine, path: &Path) -> Result<usize, IngestError> {
    let events = load_file(engine, path)?;
    info!(events, path = %path.display(), "usage history replayed");
    Ok(events)
}

fn load_file(engine: &mut SuggestEngine, path: &Path) -> Result<usize, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_words(engine, BufReader::new(file)).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })
}
