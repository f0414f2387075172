//! Data structures provided by the crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership of internal nodes
//! - Recoverable, reported handling of unsupported input

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{InsertOutcome, LanaiTrie, LanaiTrieError, LanaiTrieResult, SharedLanaiTrie};
