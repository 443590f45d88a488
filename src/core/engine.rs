use crate::core::topk::TopK;
use crate::core::trie::Trie;
use crate::core::types::Suggestion;
use tracing::debug;

/// The composition root: owns the trie and wires resolution, enumeration and
/// selection into the query operations. Queries take `&self` and never touch
/// the structure, so repeating one with no insert in between returns the
/// same answer.
pub struct SuggestEngine {
    trie: Trie,
}

impl SuggestEngine {
    pub fn new() -> Self {
        Self { trie: Trie::new() }
    }

    /// Records one occurrence of `word`: a dictionary line and a replayed
    /// usage event both land here. Unsupported words are silently dropped.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    /// The best `limit` completions of `prefix`, ranked by descending
    /// frequency with ties in word order. A limit of zero, an unresolvable
    /// prefix, or an empty subtree all produce an empty list; there is no
    /// error case. O(n log limit) over the n words below the prefix.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        if limit == 0 {
            return Vec::new();
        }

        // 1. Resolve the prefix and stream every completion below it.
        // 2. The bounded selector never holds more than `limit` of them.
        let mut best = TopK::new(limit);
        for candidate in self.trie.completions(prefix) {
            best.offer(candidate);
        }

        // 3. Survivors come out in display order.
        let ranked = best.into_ranked();
        debug!(prefix, limit, results = ranked.len(), "suggestion query");
        ranked
    }

    /// Unranked variant: the first `limit` completions in lexicographic
    /// order. Lazy, so the walk stops once enough words have been produced.
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.trie
            .completions(prefix)
            .take(limit)
            .map(|suggestion| suggestion.word)
            .collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trie.starts_with(prefix)
    }

    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.trie.prefix_count(prefix)
    }

    pub fn word_count(&self) -> usize {
        self.trie.len()
    }
}

impl Default for SuggestEngine {
    fn default() -> Self {
        Self::new()
    }
}
