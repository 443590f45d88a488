// --- File: src/core/completions.rs
use crate::core::trie::{TrieNode, ALPHABET_SIZE};
use crate::core::types::Suggestion;

struct Frame<'t> {
    node: &'t TrieNode,
    next_slot: usize,
    emitted: bool,
}

impl<'t> Frame<'t> {
    fn new(node: &'t TrieNode) -> Self {
        Self { node, next_slot: 0, emitted: false }
    }
}

/// Lazy depth-first walk over every word stored below one prefix node.
///
/// Children are visited in ascending letter order and a node's own word is
/// emitted before any of its descendants, so the sequence is lexicographic.
/// The iterator never truncates: driven to the end it yields the whole
/// subtree, and callers that want fewer simply stop driving it. Obtained via
/// [`Trie::completions`](crate::core::trie::Trie::completions), which seeds
/// the buffer with the lowercased prefix; enumerating is a pure read, so the
/// same call yields the same sequence every time.
pub struct Completions<'t> {
    stack: Vec<Frame<'t>>,
    word: String,
}

impl<'t> Completions<'t> {
    pub(crate) fn new(start: &'t TrieNode, prefix: String) -> Self {
        Self { stack: vec![Frame::new(start)], word: prefix }
    }

    pub(crate) fn empty() -> Self {
        Self { stack: Vec::new(), word: String::new() }
    }
}

impl<'t> Iterator for Completions<'t> {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Suggestion> {
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;

            if !frame.emitted {
                frame.emitted = true;
                if node.is_end {
                    return Some(Suggestion::new(self.word.clone(), node.frequency));
                }
            }

            let mut descend = None;
            while frame.next_slot < ALPHABET_SIZE {
                let slot = frame.next_slot;
                frame.next_slot += 1;
                if let Some(child) = node.children[slot].as_deref() {
                    descend = Some((b'a' + slot as u8, child));
                    break;
                }
            }

            match descend {
                Some((letter, child)) => {
                    self.word.push(letter as char);
                    self.stack.push(Frame::new(child));
                }
                None => {
                    self.stack.pop();
                    // The start frame never contributed a letter.
                    if !self.stack.is_empty() {
                        self.word.pop();
                    }
                }
            }
        }
    }
}
