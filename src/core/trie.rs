// --- File: src/core/trie.rs
use crate::core::completions::Completions;

pub(crate) const ALPHABET_SIZE: usize = 26;

/// Maps an ASCII letter to its child slot, folding case. Anything that is
/// not a letter has no slot.
fn letter_slot(ch: char) -> Option<usize> {
    if ch.is_ascii_alphabetic() {
        Some((ch.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Lowercases a word into child-slot indices. Returns `None` as soon as any
/// character falls outside ASCII letters; the word stands or falls whole.
pub(crate) fn normalize(word: &str) -> Option<Vec<u8>> {
    let mut path = Vec::with_capacity(word.len());
    for ch in word.chars() {
        path.push(letter_slot(ch)? as u8);
    }
    Some(path)
}

/// True when `insert` would accept the word.
pub(crate) fn is_supported_word(word: &str) -> bool {
    !word.is_empty() && normalize(word).is_some()
}

// --- Node layout: each child slot exclusively owns its subtree ---

#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(crate) is_end: bool,
    /// Insertion count; meaningful only while `is_end` is set.
    pub(crate) frequency: u64,
    /// Distinct words stored in this subtree, the node's own included.
    pub(crate) words_below: usize,
}

/// A case-folding prefix trie over the ASCII letters, counting how often each
/// word has been inserted. Dropping the trie drops every node with it.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`. Words containing anything but ASCII
    /// letters are rejected whole: the call validates before it touches the
    /// structure, so a rejected word leaves no trace, not even nodes for the
    /// valid prefix it started with. Rejection is silent.
    /// O(k) where k is word length.
    pub fn insert(&mut self, word: &str) {
        let path = match normalize(word) {
            Some(path) if !path.is_empty() => path,
            _ => return,
        };

        let first_insertion = !self.has_word(&path);
        if first_insertion {
            self.root.words_below += 1;
        }
        let mut node = &mut self.root;
        for &slot in &path {
            node = node.children[slot as usize].get_or_insert_with(Default::default);
            if first_insertion {
                node.words_below += 1;
            }
        }
        node.is_end = true;
        node.frequency += 1;
    }

    fn has_word(&self, path: &[u8]) -> bool {
        let mut node = &self.root;
        for &slot in path {
            match node.children[slot as usize].as_deref() {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.is_end
    }

    /// Resolves a prefix to its node. An invalid character and a missing path
    /// are indistinguishable here: both are `None`. The empty prefix resolves
    /// to the root. Pure read, O(k).
    pub(crate) fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        let path = normalize(prefix)?;
        let mut node = &self.root;
        for &slot in &path {
            node = node.children[slot as usize].as_deref()?;
        }
        Some(node)
    }

    /// Exact-word lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).map_or(false, |node| node.is_end)
    }

    /// True when at least the path for `prefix` exists.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct stored words beginning with `prefix`. Invalid and
    /// absent prefixes count zero; the empty prefix counts everything.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        self.walk(prefix).map_or(0, |node| node.words_below)
    }

    /// Distinct words stored.
    pub fn len(&self) -> usize {
        self.root.words_below
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily enumerates every stored word extending `prefix`, in
    /// lexicographic order, the prefix itself included when it is a word.
    /// An unresolvable prefix yields an empty enumeration.
    pub fn completions(&self, prefix: &str) -> Completions<'_> {
        match self.walk(prefix) {
            Some(node) => Completions::new(node, prefix.to_ascii_lowercase()),
            None => Completions::empty(),
        }
    }
}
