// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Per-word occurrence counts.

use fnv::FnvBuildHasher;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Order in which counted words are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Highest count first, ties broken alphabetically
    #[default]
    CountDesc,

    /// Alphabetical by word
    Alphabetical,
}

/// Mapping from matched word to the number of times it occurred.
///
/// Every stored count is at least 1; a word that never matched has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, u64, FnvBuildHasher>,
}

impl FrequencyMap {
    /// Creates an empty frequency map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word` and returns its new count.
    pub fn record(&mut self, word: &str) -> u64 {
        let count = self.counts.entry_ref(word).or_insert(0);
        *count += 1;
        *count
    }

    /// Returns the count for `word`, or `None` if it never matched.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Adds every count of `other` into `self`.
    ///
    /// Merging is commutative and associative, so partial maps can be combined
    /// in any order.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }

    /// Returns the entries sorted by `order`.
    pub fn sorted(&self, order: SortOrder) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        match order {
            SortOrder::CountDesc => {
                entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
            }
            SortOrder::Alphabetical => entries.sort_unstable_by(|a, b| a.0.cmp(b.0)),
        }
        entries
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for FrequencyMap {
    /// Builds a map from `(word, count)` pairs. Zero counts are dropped and
    /// repeated words are summed.
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for (word, count) in iter {
            if count > 0 {
                *map.counts.entry(word.into()).or_insert(0) += count;
            }
        }
        map
    }
}
