use std::io::Write;

use tempfile::NamedTempFile;

use suggest_core::core::topk::{rank, TopK};
use suggest_core::ingest::{load_dictionary, load_usage};
use suggest_core::{SuggestEngine, Suggestion, Trie};

fn write_lines(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file.flush().unwrap();
    file
}

fn words(results: &[Suggestion]) -> Vec<&str> {
    results.iter().map(|s| s.word.as_str()).collect()
}

#[test]
fn dictionary_plus_usage_reranks_suggestions() {
    let dictionary = write_lines(&["the", "then", "that", "this", "thaw", "toad"]);
    let usage = write_lines(&["that", "that", "that", "this"]);

    let mut engine = SuggestEngine::new();
    let loaded = load_dictionary(&mut engine, dictionary.path()).unwrap();
    assert_eq!(loaded, 6);

    // Baseline: every word once, so ranking is purely lexicographic.
    assert_eq!(
        words(&engine.suggestions("th", 10)),
        ["that", "thaw", "the", "then", "this"]
    );

    let replayed = load_usage(&mut engine, usage.path()).unwrap();
    assert_eq!(replayed, 4);

    // "that" now has frequency 4, "this" 2, the rest stay at 1.
    let reranked = engine.suggestions("th", 3);
    assert_eq!(words(&reranked), ["that", "this", "thaw"]);
    assert_eq!(reranked[0].frequency, 4);
    assert_eq!(reranked[1].frequency, 2);
}

#[test]
fn dictionary_files_tolerate_blanks_crlf_and_junk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "apple\r\n\r\nApp\nbad word\napp2\n\napt\n").unwrap();
    file.flush().unwrap();

    let mut engine = SuggestEngine::new();
    let loaded = load_dictionary(&mut engine, file.path()).unwrap();

    assert_eq!(loaded, 3);
    assert_eq!(engine.word_count(), 3);
    assert_eq!(words(&engine.suggestions("ap", 10)), ["app", "apple", "apt"]);
}

#[test]
fn tied_frequencies_resolve_in_word_order() {
    let mut engine = SuggestEngine::new();
    for word in ["apple", "app", "apt"] {
        engine.insert(word);
    }

    let results = engine.suggestions("ap", 10);
    assert_eq!(words(&results), ["app", "apple", "apt"]);
    assert!(results.iter().all(|s| s.frequency == 1));
}

#[test]
fn repeated_words_win_within_their_prefix() {
    let mut engine = SuggestEngine::new();
    for word in ["the", "the", "the", "that"] {
        engine.insert(word);
    }

    assert_eq!(words(&engine.suggestions("th", 1)), ["the"]);
}

#[test]
fn misses_and_zero_limits_yield_empty_results() {
    let mut engine = SuggestEngine::new();
    assert!(engine.suggestions("a", 5).is_empty());

    engine.insert("cat");
    assert!(engine.suggestions("dog", 5).is_empty());
    assert!(engine.suggestions("cat", 0).is_empty());
    assert!(engine.suggestions("ca t", 5).is_empty());
}

#[test]
fn casing_is_invisible_end_to_end() {
    let mut engine = SuggestEngine::new();
    engine.insert("Cat");

    let results = engine.suggestions("CAT", 5);
    assert_eq!(words(&results), ["cat"]);
    assert!(engine.contains("cAt"));
}

#[test]
fn result_size_is_min_of_limit_and_matches() {
    let mut engine = SuggestEngine::new();
    let pool = ["sun", "sand", "salt", "song", "sip", "set"];
    for word in pool {
        engine.insert(word);
    }

    for limit in 0..=pool.len() + 2 {
        assert_eq!(engine.suggestions("s", limit).len(), limit.min(pool.len()));
    }
}

#[test]
fn bounded_and_exhaustive_ranking_agree() {
    let mut trie = Trie::new();
    for word in [
        "art", "art", "arm", "army", "around", "arena", "arena", "arena", "are", "arc",
    ] {
        trie.insert(word);
    }

    for limit in 0..8 {
        let mut bounded = TopK::new(limit);
        for candidate in trie.completions("ar") {
            bounded.offer(candidate);
        }

        let exhaustive = rank(trie.completions("ar").collect(), limit);
        assert_eq!(bounded.into_ranked(), exhaustive, "limit {limit} diverged");
    }
}

#[test]
fn ranking_invariants_hold_for_every_prefix() {
    let mut engine = SuggestEngine::new();
    for word in [
        "sat", "sat", "sit", "set", "set", "set", "seat", "send", "so", "soap", "sop", "sat",
    ] {
        engine.insert(word);
    }

    for prefix in ["", "s", "sa", "se", "so", "sea", "z"] {
        let results = engine.suggestions(prefix, 100);
        for pair in results.windows(2) {
            assert!(
                pair[0].frequency > pair[1].frequency
                    || (pair[0].frequency == pair[1].frequency && pair[0].word < pair[1].word),
                "order violated under '{prefix}': {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn a_word_appears_in_its_own_suggestions() {
    let mut engine = SuggestEngine::new();
    engine.insert("app");
    engine.insert("apple");

    let results = engine.suggestions("app", 10);
    assert_eq!(words(&results), ["app", "apple"]);
}
