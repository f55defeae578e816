// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary trie.
//!
//! A prefix tree answering exact-word membership queries. Words sharing a
//! prefix share the path for that prefix; a node marked terminal denotes a
//! complete stored word ending there.
//!
//! The trie performs no normalization. Callers that want case-insensitive
//! matching lowercase on both sides (see [`crate::matching`]).
//!
//! # Example
//!
//! ```
//! use termtally_lib::data_structures::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("word");
//! trie.add("crossword");
//!
//! assert!(trie.search("word"));
//! assert!(trie.search("crossword"));
//! assert!(!trie.search("cross"));
//!
//! trie.remove("word");
//! assert!(!trie.search("word"));
//! assert!(trie.search("crossword"));
//! ```

mod node;

#[cfg(test)]
mod tests;

use std::str::Chars;

use node::TrieNode;

/// Outcome of a recursive removal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    /// The word is not stored; nothing changed.
    NotFound,

    /// The word was removed. `prune` is true when the node that reported it
    /// has no children left and may be detached by its parent.
    Removed { prune: bool },
}

/// Prefix tree over whole words.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of stored words
    len: usize,
}

impl Trie {
    /// Creates a new empty `Trie`.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Returns `true` if the root has no children.
    ///
    /// A trie holding only the empty string is still considered empty.
    pub fn is_empty(&self) -> bool {
        self.root.has_no_children()
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds a word to the trie.
    ///
    /// Adding a word twice leaves the trie as if it had been added once. The
    /// empty string marks the root terminal.
    pub fn add(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        if !node.is_terminal {
            node.is_terminal = true;
            self.len += 1;
        }
    }

    /// Removes a word from the trie, pruning branches that no longer lead to
    /// any stored word.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` if it was
    /// not present (in which case the trie is unchanged).
    pub fn remove(&mut self, word: &str) -> bool {
        match Self::remove_from(&mut self.root, word.chars()) {
            Removal::NotFound => false,
            Removal::Removed { .. } => {
                self.len -= 1;
                true
            }
        }
    }

    /// Recursive removal below `node`, with `rest` holding the characters not
    /// yet consumed.
    ///
    /// A child is detached only when it reports `prune` and is not itself the
    /// end of another word. Propagation stops at the first node that is
    /// terminal or still has other children.
    fn remove_from(node: &mut TrieNode, mut rest: Chars<'_>) -> Removal {
        let c = match rest.next() {
            Some(c) => c,
            None => {
                if !node.is_terminal {
                    return Removal::NotFound;
                }
                node.is_terminal = false;
                return Removal::Removed {
                    prune: node.has_no_children(),
                };
            }
        };

        let child = match node.children.get_mut(&c) {
            Some(child) => child,
            None => return Removal::NotFound,
        };

        let outcome = Self::remove_from(child, rest);
        let detach = matches!(outcome, Removal::Removed { prune: true }) && !child.is_terminal;

        match outcome {
            Removal::NotFound => Removal::NotFound,
            Removal::Removed { .. } if detach => {
                node.children.remove(&c);
                Removal::Removed {
                    prune: node.has_no_children(),
                }
            }
            Removal::Removed { .. } => Removal::Removed { prune: false },
        }
    }

    /// Returns `true` if `word` is stored in the trie.
    ///
    /// A strict prefix of a stored word is not a match.
    pub fn search(&self, word: &str) -> bool {
        word.chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .is_some_and(|node| node.is_terminal)
    }

    /// Removes every word from the trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    /// Returns all stored words in lexicographic order.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        Self::collect_words(&self.root, &mut prefix, &mut words);
        words.sort_unstable();
        words
    }

    fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut Vec<String>) {
        if node.is_terminal {
            words.push(prefix.clone());
        }
        for (&c, child) in &node.children {
            prefix.push(c);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
