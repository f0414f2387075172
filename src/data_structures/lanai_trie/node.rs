// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! Each node stands for one character position of the stored strings and
//! exclusively owns its children. The root is the only node without a
//! character.
//!
//! A stored string of `n` characters is a chain `n` nodes deep, so nothing
//! here recurses over the tree: walks, counts and teardown all keep an
//! explicit stack on the heap.

use std::fmt::{Debug, Formatter};

use fnv::FnvHashMap;

/// A node in the Lanai Trie.
#[derive(Default)]
pub(crate) struct TrieNode {
    /// Character of this node, `None` only for the root
    pub value: Option<char>,

    /// Map of characters to child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether a complete insertion ended at this node
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a node holding `value` with no children.
    pub fn with_value(value: char) -> Self {
        Self {
            value: Some(value),
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if some stored string stops at this node.
    ///
    /// Leaves count even when no complete insertion ended here: an abandoned
    /// insertion leaves its partial path behind.
    pub fn ends_string(&self) -> bool {
        self.value.is_some() && (self.is_terminal || self.is_leaf())
    }

    /// Returns the child for `c`, creating it first if it is missing.
    ///
    /// The flag is `true` when the child was created by this call.
    pub fn child_or_insert(&mut self, c: char) -> (&mut TrieNode, bool) {
        let created = !self.children.contains_key(&c);
        let child = self
            .children
            .entry(c)
            .or_insert_with(|| TrieNode::with_value(c));
        (child, created)
    }

    /// Collects every stored string in this subtree, each starting with this
    /// node's own character. The root contributes no character.
    pub fn accumulate(&self) -> Vec<String> {
        let suffixes = self.suffixes();
        match self.value {
            Some(value) => suffixes
                .into_iter()
                .map(|suffix| {
                    let mut s = String::with_capacity(suffix.len() + 1);
                    s.push(value);
                    s.push_str(&suffix);
                    s
                })
                .collect(),
            None => suffixes,
        }
    }

    /// Collects the strings stored below this node, excluding the node's own
    /// character. Yields `""` first when a stored string stops here.
    ///
    /// Depth-first over an explicit stack of `(node, path length before the
    /// node)`. Every stored character is ASCII, so byte lengths are character
    /// counts and `truncate` rewinds `path` to the node's parent.
    pub fn suffixes(&self) -> Vec<String> {
        let mut suffixes = Vec::new();
        if self.ends_string() {
            suffixes.push(String::new());
        }

        let mut path = String::new();
        let mut stack: Vec<(&TrieNode, usize)> =
            self.children.values().map(|child| (child, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            path.truncate(depth);
            if let Some(c) = node.value {
                path.push(c);
            }
            if node.ends_string() {
                suffixes.push(path.clone());
            }
            let depth = path.len();
            stack.extend(node.children.values().map(|child| (child, depth)));
        }

        suffixes
    }

    /// Visits every node in this subtree, including this one.
    fn for_each_node<F: FnMut(&TrieNode)>(&self, mut visit: F) {
        let mut stack: Vec<&TrieNode> = vec![self];
        while let Some(node) = stack.pop() {
            visit(node);
            stack.extend(node.children.values());
        }
    }

    /// Number of strings stored in this subtree.
    pub fn count_strings(&self) -> usize {
        let mut count = 0;
        self.for_each_node(|node| count += usize::from(node.ends_string()));
        count
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        self.for_each_node(|_| count += 1);
        count
    }
}

impl Drop for TrieNode {
    // Descendants are moved onto a heap stack; each is dropped childless
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl Debug for TrieNode {
    // Lists child keys only, never descends
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<char> = self.children.keys().copied().collect();
        keys.sort_unstable();
        f.debug_struct("TrieNode")
            .field("value", &self.value)
            .field("children", &keys)
            .field("is_terminal", &self.is_terminal)
            .finish()
    }
}
