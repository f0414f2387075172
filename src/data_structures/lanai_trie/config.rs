// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the Lanai Trie.

use serde::{Deserialize, Serialize};

/// Configuration for the Lanai Trie.
///
/// This is also the `[trie]` section of the crate-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Whether rejected characters are logged.
    /// When false, rejections are dropped silently; operations behave the same.
    pub report_rejections: bool,
}

impl LanaiTrieConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables logging of rejected characters.
    pub fn with_report_rejections(mut self, report_rejections: bool) -> Self {
        self.report_rejections = report_rejections;
        self
    }
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            report_rejections: true,
        }
    }
}
