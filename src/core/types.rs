// src/core/types.rs
use serde::Serialize;
use std::cmp::Ordering;

/// A single autocompletion result: a stored word together with the number of
/// times it has been inserted (dictionary baseline plus usage replays).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    /// Total insertion count for this word. Only ever increases.
    pub frequency: u64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self { word: word.into(), frequency }
    }
}

/// Suggestions order by rank: higher frequency sorts first, and equal
/// frequencies fall back to ascending word order. `a < b` therefore means
/// "a outranks b", so a plain `sort` yields the display order and a max-heap
/// keeps its worst element on top.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_frequency_ranks_first() {
        let rare = Suggestion::new("zebra", 2);
        let common = Suggestion::new("apple", 9);
        assert!(common < rare);
    }

    #[test]
    fn equal_frequency_breaks_ties_by_word() {
        let a = Suggestion::new("apple", 3);
        let b = Suggestion::new("apply", 3);
        assert!(a < b);
    }

    #[test]
    fn sort_produces_display_order() {
        let mut all = vec![
            Suggestion::new("that", 1),
            Suggestion::new("the", 3),
            Suggestion::new("thaw", 1),
        ];
        all.sort();
        let words: Vec<&str> = all.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, ["the", "that", "thaw"]);
    }
}
