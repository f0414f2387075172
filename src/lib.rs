//! Lanai Trie Library
//!
//! A prefix tree over the lowercase Latin alphabet. Strings are inserted
//! case-insensitively and retrieved by prefix.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie, its nodes and the
//!   reporting of rejected characters
//! - [`config`] loads optional settings from files and the environment
//! - [`logging`] installs a `tracing` subscriber for applications
//! - [`error`] defines the crate-level error type
//!
//! # Configuration
//!
//! The trie itself reads no files and no environment. [`config`],
//! [`logging`] and [`init`] are optional wiring for applications: `init`
//! merges a config file with `LANAI__*` environment overrides (for example
//! `LANAI__LOG__LEVEL=debug`) and hands the `[trie]` section to
//! [`LanaiTrie::with_config`]. Code that builds a [`LanaiTrie`] directly is
//! unaffected by either.
//!
//! # Example
//!
//! ```
//! use lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("Joe");
//! trie.insert("JoeIsDeveloper");
//!
//! assert_eq!(trie.search("JOEIS"), Some(vec!["joeisdeveloper".to_string()]));
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{InsertOutcome, LanaiTrie, SharedLanaiTrie};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and `LANAI__*` environment
/// variables, installs the log subscriber it describes and returns a trie
/// configured from it.
pub fn init<P: AsRef<std::path::Path>>(config_path: Option<P>) -> error::LanaiResult<LanaiTrie> {
    let config = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&config.log)?;
    tracing::info!(version = VERSION, "Lanai trie initialized");
    Ok(LanaiTrie::with_config(config.trie))
}
