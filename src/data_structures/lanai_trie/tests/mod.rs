// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the Lanai Trie.

mod unit_tests;

/// Sorts search results so they can be compared with `assert_eq!`.
pub(super) fn sorted(found: Option<Vec<String>>) -> Option<Vec<String>> {
    found.map(|mut v| {
        v.sort();
        v
    })
}
