// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe handle to a [`LanaiTrie`].
//!
//! `LanaiTrie` itself does no locking. This handle puts the whole tree behind
//! one reader-writer lock: searches run in parallel, insertions are exclusive.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{InsertOutcome, LanaiTrie, LanaiTrieConfig};

/// A cloneable, lock-protected `LanaiTrie`.
#[derive(Debug, Clone, Default)]
pub struct SharedLanaiTrie {
    inner: Arc<RwLock<LanaiTrie>>,
}

impl SharedLanaiTrie {
    /// Creates a new empty shared trie with default configuration.
    pub fn new() -> Self {
        Self::from(LanaiTrie::new())
    }

    /// Creates a new empty shared trie with the specified configuration.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        Self::from(LanaiTrie::with_config(config))
    }

    /// Inserts a string. See [`LanaiTrie::insert`].
    pub fn insert<'a, S>(&self, s: S) -> InsertOutcome
    where
        S: Into<Option<&'a str>>,
    {
        self.inner.write().insert(s)
    }

    /// Finds every stored string starting with `prefix`. See [`LanaiTrie::search`].
    pub fn search<'a, P>(&self, prefix: P) -> Option<Vec<String>>
    where
        P: Into<Option<&'a str>>,
    {
        self.inner.read().search(prefix)
    }

    /// See [`LanaiTrie::contains`].
    pub fn contains(&self, s: &str) -> bool {
        self.inner.read().contains(s)
    }

    /// See [`LanaiTrie::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`LanaiTrie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<LanaiTrie> for SharedLanaiTrie {
    fn from(trie: LanaiTrie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}
