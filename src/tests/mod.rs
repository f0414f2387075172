//! Crate-level test modules.
//!
//! Trie behaviour is tested next to the trie in
//! `data_structures::lanai_trie::tests`; this module covers configuration
//! and the crate error type. Every test that touches environment variables
//! uses its own prefix so tests can run in parallel.


pub use test_utils::TestFixture;
