// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Alphabet accepted by the Lanai Trie.

/// Number of letters in the supported alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the position of `c` in the alphabet `a..=z`, or `None` if the
/// character is not a lowercase Latin letter.
///
/// Input is lowercased before it reaches this check, so uppercase ASCII never
/// gets here from the public API.
pub fn char_index(c: char) -> Option<usize> {
    let index = (c as u32).wrapping_sub('a' as u32) as usize;
    (index < ALPHABET_SIZE).then_some(index)
}

/// Returns `true` if `c` can be stored in the trie.
pub fn is_supported(c: char) -> bool {
    char_index(c).is_some()
}
