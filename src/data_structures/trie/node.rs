// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the dictionary trie.
//!
//! Each node exclusively owns its children, so dropping an entry from
//! `children` drops the whole subtree below it.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

/// Child edges of a node, keyed by the character on the edge.
pub(crate) type Children = HashMap<char, TrieNode, FnvBuildHasher>;

/// A node in the dictionary trie.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to child nodes
    pub(crate) children: Children,

    /// Whether a stored word ends exactly at this node
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child for `c`, creating it when the edge does not exist yet.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    pub(crate) fn has_no_children(&self) -> bool {
        self.children.is_empty()
    }
}
