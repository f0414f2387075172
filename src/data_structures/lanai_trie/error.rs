//! Error types for the Lanai Trie.
//!
//! None of these are fatal. Public operations turn them into a no-op or a
//! "no result" sentinel; `try_search` exposes them for callers who need the
//! reason.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// No input string was supplied.
    #[error("No input provided")]
    AbsentInput,

    /// A character outside `a..=z` was found after lowercasing.
    #[error("Following character is not supported in this trie: '{character}' at position {position}")]
    UnsupportedCharacter {
        /// The rejected character.
        character: char,
        /// Character offset of the rejected character in the lowercased input.
        position: usize,
    },

    /// The prefix walked off the end of the stored paths.
    #[error("No stored string starts with: {0}")]
    PrefixNotFound(String),
}
