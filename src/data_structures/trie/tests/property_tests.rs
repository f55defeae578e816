// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the dictionary trie.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::trie::Trie;

// Small alphabet so generated words share prefixes often
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{0,6}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..30)
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        word_strategy().prop_map(Op::Add),
        word_strategy().prop_map(Op::Remove),
    ]
}

proptest! {
    // Property: nothing is found in an empty trie
    #[test]
    fn prop_empty_trie_finds_nothing(word in word_strategy()) {
        let trie = Trie::new();
        prop_assert!(!trie.search(&word));
    }

    // Property: every added word is searchable
    #[test]
    fn prop_add_then_search(words in words_strategy()) {
        let trie: Trie = words.iter().collect();
        for word in &words {
            prop_assert!(trie.search(word));
        }
    }

    // Property: adding the same words twice is the same as adding them once
    #[test]
    fn prop_add_idempotent(words in words_strategy(), probe in word_strategy()) {
        let once: Trie = words.iter().collect();
        let mut twice = once.clone();
        twice.extend(words.iter());

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.words(), twice.words());
        prop_assert_eq!(once.search(&probe), twice.search(&probe));
    }

    // Property: removing every word, in any order, empties the trie
    #[test]
    fn prop_remove_all_any_order(
        (words, shuffled) in words_strategy()
            .prop_flat_map(|words| (Just(words.clone()), Just(words).prop_shuffle()))
    ) {
        let mut trie: Trie = words.iter().collect();
        for word in &shuffled {
            trie.remove(word);
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.len(), 0);
        for word in &words {
            prop_assert!(!trie.search(word));
        }
    }

    // Property: removing an absent word changes nothing
    #[test]
    fn prop_remove_absent_is_noop(words in words_strategy(), absent in word_strategy()) {
        prop_assume!(!words.contains(&absent));

        let mut trie: Trie = words.iter().collect();
        let before = trie.words();

        prop_assert!(!trie.remove(&absent));
        prop_assert_eq!(trie.words(), before);
        for word in &words {
            prop_assert!(trie.search(word));
        }
    }

    // Property: the trie behaves like a set under any sequence of adds and removes
    #[test]
    fn prop_matches_set_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut trie = Trie::new();
        let mut model = BTreeSet::new();

        for op in &ops {
            match op {
                Op::Add(word) => {
                    trie.add(word);
                    model.insert(word.clone());
                }
                Op::Remove(word) => {
                    prop_assert_eq!(trie.remove(word), model.remove(word));
                }
            }
        }

        prop_assert_eq!(trie.len(), model.len());
        prop_assert_eq!(trie.words(), model.iter().cloned().collect::<Vec<_>>());
        prop_assert_eq!(trie.is_empty(), model.iter().all(|w| w.is_empty()));
    }
}
