// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the Lanai Trie.

use std::sync::Arc;

use mockall::predicate::always;
use test_case::test_case;

use super::sorted;
use crate::data_structures::lanai_trie::report::MockRejectionReporter;
use crate::data_structures::lanai_trie::{
    InsertOutcome, LanaiTrie, LanaiTrieConfig, LanaiTrieError, Operation, Rejection,
};

fn strings(words: &[&str]) -> Option<Vec<String>> {
    let mut v: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    v.sort();
    Some(v)
}

/// Builds a trie whose reporter must never be called.
fn quiet_trie() -> LanaiTrie {
    let mut reporter = MockRejectionReporter::new();
    reporter.expect_report().never();
    LanaiTrie::with_reporter(Arc::new(reporter))
}

#[test]
fn test_initial_state() {
    let trie = LanaiTrie::new();

    assert!(trie.is_empty());
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.search(""), Some(Vec::new()));
    assert_eq!(trie.search("NoPrefix"), None);
    assert_eq!(trie.search(None), None);
}

#[test]
fn test_insert_outcomes() {
    let mut trie = LanaiTrie::new();

    assert_eq!(trie.insert("Hello"), InsertOutcome::Inserted);
    assert_eq!(trie.insert("hello"), InsertOutcome::Inserted);
    assert_eq!(trie.insert(None), InsertOutcome::Skipped);
    assert_eq!(trie.insert(""), InsertOutcome::Skipped);
    assert_eq!(
        trie.insert("he11o"),
        InsertOutcome::Truncated {
            rejected: '1',
            position: 2
        }
    );
}

#[test]
fn test_empty_insert_stores_nothing() {
    let mut trie = quiet_trie();
    trie.insert("");

    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.search(""), Some(Vec::new()));
    assert!(!trie.contains(""));
}

#[test]
fn test_duplicates_collapse() {
    let mut trie = quiet_trie();
    trie.insert("Aloha");
    let nodes = trie.node_count();

    trie.insert("aloha");
    trie.insert("ALOHA");

    assert_eq!(trie.node_count(), nodes);
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.search(""), strings(&["aloha"]));
}

#[test]
fn test_strings_ending_inside_other_strings() {
    let mut trie = quiet_trie();
    trie.insert("a");
    trie.insert("ab");
    trie.insert("abc");

    assert_eq!(sorted(trie.search("a")), strings(&["a", "ab", "abc"]));
    assert_eq!(sorted(trie.search("ab")), strings(&["ab", "abc"]));
    assert_eq!(trie.search("abc"), strings(&["abc"]));
    assert_eq!(trie.search("abcd"), None);
    assert!(trie.contains("AB"));
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.node_count(), 3);
}

#[test]
fn test_prefix_alone_is_not_a_stored_string() {
    let mut trie = quiet_trie();
    trie.insert("abc");

    // "ab" is only a path, not a stored string
    assert!(!trie.contains("ab"));
    assert_eq!(trie.search("ab"), strings(&["abc"]));
}

#[test]
fn test_truncated_insert_keeps_partial_path() {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_report_rejections(false));

    let outcome = trie.insert("ab1c");
    assert_eq!(
        outcome,
        InsertOutcome::Truncated {
            rejected: '1',
            position: 2
        }
    );

    // No rollback: the leaf left behind is reported by search
    assert_eq!(trie.node_count(), 2);
    assert_eq!(trie.search("a"), strings(&["ab"]));
    assert_eq!(trie.search("abc"), None);
}

#[test]
fn test_truncated_insert_over_existing_path_adds_nothing() {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_report_rejections(false));
    trie.insert("abcd");

    trie.insert("ab-x");

    // "ab" ends inside "abcd" and was never completed
    assert_eq!(trie.search(""), strings(&["abcd"]));
    assert!(!trie.contains("ab"));
}

#[test_case("ab1" ; "digit")]
#[test_case("a b" ; "space")]
#[test_case("café" ; "accented letter")]
#[test_case("a_b" ; "underscore")]
#[test_case("!" ; "symbol only")]
fn test_unsupported_prefix_has_no_result(prefix: &str) {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_report_rejections(false));
    trie.insert("abc");
    trie.insert("cafe");

    assert_eq!(trie.search(prefix), None);
    assert!(matches!(
        trie.try_search(prefix),
        Err(LanaiTrieError::UnsupportedCharacter { .. })
    ));
}

#[test]
fn test_try_search_reasons() {
    let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_report_rejections(false));
    trie.insert("kona");

    assert_eq!(trie.try_search(None), Err(LanaiTrieError::AbsentInput));
    assert_eq!(
        trie.try_search("Kz"),
        Err(LanaiTrieError::PrefixNotFound("kz".to_string()))
    );
    assert_eq!(
        trie.try_search("k0na"),
        Err(LanaiTrieError::UnsupportedCharacter {
            character: '0',
            position: 1
        })
    );
    assert_eq!(trie.try_search("KO"), Ok(vec!["kona".to_string()]));
}

#[test]
fn test_unsupported_character_checked_before_missing_child() {
    let trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_report_rejections(false));

    assert!(matches!(
        trie.try_search("9"),
        Err(LanaiTrieError::UnsupportedCharacter { character: '9', .. })
    ));
}

#[test]
fn test_insert_rejection_is_reported() {
    let mut reporter = MockRejectionReporter::new();
    reporter
        .expect_report()
        .withf(|rejection: &Rejection| {
            rejection.operation == Operation::Insert
                && rejection.input == "nima2"
                && rejection.character == '2'
                && rejection.position == 4
        })
        .times(1)
        .return_const(());

    let mut trie = LanaiTrie::with_reporter(Arc::new(reporter));
    trie.insert("Nima2");
}

#[test]
fn test_search_rejection_is_reported() {
    let mut reporter = MockRejectionReporter::new();
    reporter
        .expect_report()
        .withf(|rejection: &Rejection| {
            rejection.operation == Operation::Search && rejection.character == '#'
        })
        .times(1)
        .return_const(());

    let trie = LanaiTrie::with_reporter(Arc::new(reporter));
    assert_eq!(trie.search("a#"), None);
}

#[test]
fn test_missing_prefix_is_not_reported() {
    let mut reporter = MockRejectionReporter::new();
    reporter.expect_report().with(always()).never();

    let mut trie = LanaiTrie::with_reporter(Arc::new(reporter));
    trie.insert("abc");
    trie.insert(None);
    assert_eq!(trie.search("xyz"), None);
    assert_eq!(trie.search(None), None);
}

#[test]
fn test_only_first_unsupported_character_is_reported() {
    let mut reporter = MockRejectionReporter::new();
    reporter.expect_report().times(1).return_const(());

    let mut trie = LanaiTrie::with_reporter(Arc::new(reporter));
    trie.insert("a1b2c3");
}

#[test]
fn test_results_are_stable_without_mutation() {
    let trie: LanaiTrie = ["kahuna", "kai", "kala", "kane", "koa"].into_iter().collect();

    let first = trie.search("k");
    for _ in 0..10 {
        assert_eq!(trie.search("k"), first);
    }
}

#[test]
fn test_extend_and_from_iterator() {
    let mut trie: LanaiTrie = vec!["Puka".to_string(), "Niihau".to_string()]
        .into_iter()
        .collect();
    trie.extend(["Kona", "kahuna"]);

    assert_eq!(trie.len(), 4);
    assert_eq!(sorted(trie.search("K")), strings(&["kahuna", "kona"]));
}

#[test]
fn test_uppercase_prefix_lowercases_results() {
    let mut trie = quiet_trie();
    trie.insert("Joe");

    assert_eq!(trie.search("JOE"), strings(&["joe"]));
    assert_eq!(trie.search("JOE"), trie.search("joe"));
}

#[test]
fn test_long_string_insert_search_and_drop() {
    const LENGTH: usize = 100_000;
    let long = "a".repeat(LENGTH);

    let mut trie = quiet_trie();
    assert_eq!(trie.insert(long.to_uppercase().as_str()), InsertOutcome::Inserted);
    trie.insert("ab");

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), LENGTH + 1);
    assert!(trie.contains(&long));

    let everything = trie.search("").unwrap_or_default();
    assert_eq!(everything.len(), 2);
    assert!(everything.contains(&long));

    let deep = trie.search(&long[..LENGTH / 2]).unwrap_or_default();
    assert_eq!(deep, vec![long.clone()]);

    // Debug output stays shallow
    assert!(format!("{trie:?}").len() < 1_000);

    drop(trie);
}

#[test]
fn test_many_long_strings_drop() {
    let mut trie = quiet_trie();
    for c in 'a'..='e' {
        trie.insert(c.to_string().repeat(20_000).as_str());
    }
    assert_eq!(trie.len(), 5);
    assert_eq!(trie.node_count(), 100_000);
    drop(trie);
}
