// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Reporting of rejected characters.
//!
//! A rejected character never fails an operation. Insert keeps what it
//! already stored and search returns no result; the rejection itself goes to
//! a [`RejectionReporter`] so it can be logged or collected.

use std::fmt::{Display, Formatter};

/// The trie operation that rejected a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `LanaiTrie::insert`
    Insert,
    /// `LanaiTrie::search`
    Search,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Insert => write!(f, "insert"),
            Operation::Search => write!(f, "search"),
        }
    }
}

/// A character the trie refused to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Operation that hit the character
    pub operation: Operation,

    /// Lowercased input string
    pub input: String,

    /// The unsupported character
    pub character: char,

    /// Character offset within `input`
    pub position: usize,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rejected '{}' at position {} of \"{}\"",
            self.operation, self.character, self.position, self.input
        )
    }
}

/// Sink for rejected characters.
#[cfg_attr(test, mockall::automock)]
pub trait RejectionReporter: Send + Sync + std::fmt::Debug {
    /// Report a rejected character.
    fn report(&self, rejection: &Rejection);
}

/// Reporter that logs rejections as `tracing` warnings.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingRejectionReporter;

impl RejectionReporter for TracingRejectionReporter {
    fn report(&self, rejection: &Rejection) {
        tracing::warn!(
            operation = %rejection.operation,
            input = %rejection.input,
            character = %rejection.character,
            position = rejection.position,
            "Following character is not supported in this trie"
        );
    }
}

/// Reporter that discards every rejection.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullRejectionReporter;

impl RejectionReporter for NullRejectionReporter {
    fn report(&self, _rejection: &Rejection) {}
}
