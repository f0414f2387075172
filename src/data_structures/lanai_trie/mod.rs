// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie: a prefix tree over the lowercase Latin alphabet.
//!
//! Strings are lowercased on the way in, stored one character per level and
//! retrieved by prefix. Only `a..=z` can be stored; any other character
//! stops the current operation without failing it.
//!
//! # Example
//!
//! ```
//! use lanai_trie::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("JoeIsDriver");
//! trie.insert("JoeIsDeveloper");
//! trie.insert("HelloWorld");
//!
//! let mut found = trie.search("Joe").unwrap();
//! found.sort();
//! assert_eq!(found, vec!["joeisdeveloper", "joeisdriver"]);
//!
//! // No stored string starts with this prefix
//! assert_eq!(trie.search("nima"), None);
//!
//! // An absent prefix is different from an empty one
//! assert_eq!(trie.search(None), None);
//! assert_eq!(trie.search("").map(|all| all.len()), Some(3));
//! ```
//!
//! # Duplicates and empty strings
//!
//! Nodes carry no occurrence count, so inserting a string twice is
//! indistinguishable from inserting it once. Inserting `""` stores nothing:
//! the root is never marked as the end of a string.

mod alphabet;
mod config;
mod error;
mod node;
mod report;
mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

pub use alphabet::{char_index, is_supported, ALPHABET_SIZE};
pub use config::LanaiTrieConfig;
pub use error::LanaiTrieError;
pub use report::{
    NullRejectionReporter, Operation, Rejection, RejectionReporter, TracingRejectionReporter,
};
pub use shared::SharedLanaiTrie;

use node::TrieNode;

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// What an insertion did to the trie.
///
/// Callers that only care about the side effect can ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Every character was stored and the string is now retrievable.
    Inserted,

    /// The input was absent or empty; the trie is unchanged.
    Skipped,

    /// An unsupported character stopped the insertion. Characters before it
    /// were stored and stay in the trie.
    Truncated {
        /// The rejected character.
        rejected: char,
        /// Character offset of `rejected` in the lowercased input.
        position: usize,
    },
}

/// Prefix tree over the lowercase Latin alphabet.
///
/// The trie exclusively owns its node tree. It grows on insertion and is
/// never pruned. Mutation needs `&mut self`; wrap it in a
/// [`SharedLanaiTrie`] to share it between threads.
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node of the trie, never replaced
    root: TrieNode,

    /// Configuration options
    config: LanaiTrieConfig,

    /// Destination for rejected characters
    reporter: Arc<dyn RejectionReporter>,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// Rejections are logged through `tracing` unless
    /// `config.report_rejections` is false.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        let reporter: Arc<dyn RejectionReporter> = if config.report_rejections {
            Arc::new(TracingRejectionReporter)
        } else {
            Arc::new(NullRejectionReporter)
        };

        Self {
            root: TrieNode::root(),
            config,
            reporter,
        }
    }

    /// Creates a new empty `LanaiTrie` that sends rejections to `reporter`.
    pub fn with_reporter(reporter: Arc<dyn RejectionReporter>) -> Self {
        Self {
            root: TrieNode::root(),
            config: LanaiTrieConfig::default(),
            reporter,
        }
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Inserts a string into the trie.
    ///
    /// The string is lowercased and stored one character per level. An
    /// absent (`None`) or empty string is ignored. The first unsupported
    /// character is reported and ends the insertion; whatever was stored
    /// before it stays.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to insert, or `None`.
    ///
    /// # Returns
    ///
    /// An [`InsertOutcome`] describing what was stored.
    pub fn insert<'a, S>(&mut self, s: S) -> InsertOutcome
    where
        S: Into<Option<&'a str>>,
    {
        let Some(s) = s.into() else {
            return InsertOutcome::Skipped;
        };

        let lowered = s.to_lowercase();
        if lowered.is_empty() {
            return InsertOutcome::Skipped;
        }

        let mut node = &mut self.root;
        let mut created = 0usize;

        for (position, c) in lowered.chars().enumerate() {
            if !is_supported(c) {
                self.reporter.report(&Rejection {
                    operation: Operation::Insert,
                    input: lowered.clone(),
                    character: c,
                    position,
                });
                debug!(input = %lowered, created, "Insertion abandoned");
                return InsertOutcome::Truncated {
                    rejected: c,
                    position,
                };
            }

            let (child, is_new) = node.child_or_insert(c);
            created += usize::from(is_new);
            node = child;
        }

        node.is_terminal = true;
        debug!(input = %lowered, created, "Inserted string");

        InsertOutcome::Inserted
    }

    /// Finds every stored string that starts with `prefix`.
    ///
    /// The prefix is matched case-insensitively and each result is the
    /// lowercased prefix followed by the rest of a stored string. Order is
    /// unspecified but stable while the trie is not modified.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for, or `None`.
    ///
    /// # Returns
    ///
    /// * `Some(Vec<String>)` - All matches. Empty only for `""` on an empty trie.
    /// * `None` - The prefix was absent, contained an unsupported character,
    ///   or left the stored paths.
    pub fn search<'a, P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: Into<Option<&'a str>>,
    {
        self.try_search(prefix).ok()
    }

    /// Like [`search`](Self::search), but says why nothing was found.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - All matches.
    /// * `Err(LanaiTrieError)` - `AbsentInput`, `UnsupportedCharacter` or
    ///   `PrefixNotFound`.
    pub fn try_search<'a, P>(&self, prefix: P) -> LanaiTrieResult<Vec<String>>
    where
        P: Into<Option<&'a str>>,
    {
        let prefix = prefix.into().ok_or(LanaiTrieError::AbsentInput)?;
        let lowered = prefix.to_lowercase();

        let mut node = &self.root;
        for (position, c) in lowered.chars().enumerate() {
            if !is_supported(c) {
                self.reporter.report(&Rejection {
                    operation: Operation::Search,
                    input: lowered.clone(),
                    character: c,
                    position,
                });
                return Err(LanaiTrieError::UnsupportedCharacter {
                    character: c,
                    position,
                });
            }

            node = match node.children.get(&c) {
                Some(child) => child,
                None => return Err(LanaiTrieError::PrefixNotFound(lowered.clone())),
            };
        }

        let found: Vec<String> = node
            .suffixes()
            .into_iter()
            .map(|suffix| format!("{lowered}{suffix}"))
            .collect();

        debug!(prefix = %lowered, matches = found.len(), "Prefix search completed");
        Ok(found)
    }

    /// Checks whether exactly `s` (case-insensitively) is stored.
    ///
    /// A partial path left by an abandoned insertion counts as stored when it
    /// ends in a leaf, matching what `search` reports.
    pub fn contains(&self, s: &str) -> bool {
        let lowered = s.to_lowercase();
        let mut node = &self.root;
        for c in lowered.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.ends_string()
    }

    /// Returns the number of distinct strings `search("")` would return.
    ///
    /// This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root.count_strings()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns the number of nodes in the trie, not counting the root.
    pub fn node_count(&self) -> usize {
        self.root.count_nodes() - 1
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for LanaiTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.insert(s.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for LanaiTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = LanaiTrie::new();
        trie.extend(iter);
        trie
    }
}
