//! Error module for the Lanai Trie crate.
//!
//! Trie operations never fail outright; their error type only explains a
//! "no result". Fallible work at the crate level (loading configuration,
//! installing the log subscriber) returns [`LanaiError`].

use thiserror::Error;

use crate::data_structures::lanai_trie::LanaiTrieError;

pub mod config;

pub use config::ConfigError;

/// Result type alias used throughout the crate.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for the crate.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors explaining why a trie operation produced no result.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
