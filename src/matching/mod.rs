// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dictionary loading and word counting.
//!
//! The [`DictionaryLoader`] turns a newline-delimited word list into a
//! [`Trie`](crate::data_structures::Trie); the [`WordCounter`] then scans text
//! line by line, splits it into tokens and tallies every token the trie
//! contains into a [`FrequencyMap`].
//!
//! # Example
//!
//! ```
//! use termtally_lib::matching::{DictionaryLoader, WordCounter};
//!
//! let dictionary = DictionaryLoader::new().load_lines(["name", "Detect", " AI "]);
//! let counts = WordCounter::new(&dictionary)
//!     .count_str("Name: AI-driven name-based detection");
//!
//! assert_eq!(counts.get("name"), Some(2));
//! assert_eq!(counts.get("ai"), Some(1));
//! assert_eq!(counts.get("detect"), None);
//! ```

use std::borrow::Cow;

mod counter;
mod frequency;
mod loader;
pub mod source;
pub mod tokenizer;

pub use counter::WordCounter;
pub use frequency::{FrequencyMap, SortOrder};
pub use loader::DictionaryLoader;

use crate::config::MatchingConfig;

/// Options shared by the loader and the counter.
///
/// Both sides must normalize the same way, otherwise dictionary words and
/// text tokens never meet.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Whether words and tokens are lowercased before use
    pub case_insensitive: bool,

    /// Whether blank dictionary lines are skipped instead of stored as ""
    pub skip_blank_lines: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            skip_blank_lines: false,
        }
    }
}

impl MatchOptions {
    /// Creates a new options object with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether matching should be case-insensitive.
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    /// Sets whether blank dictionary lines are skipped.
    pub fn skip_blank_lines(mut self, value: bool) -> Self {
        self.skip_blank_lines = value;
        self
    }

    /// Applies the configured case normalization to `word`.
    ///
    /// Titlecase letters such as `ǅ` are not uppercase but still fold, so the
    /// check is whether lowercasing changes any character.
    pub fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if self.case_insensitive && word.chars().any(changes_when_lowercased) {
            Cow::Owned(word.to_lowercase())
        } else {
            Cow::Borrowed(word)
        }
    }
}

fn changes_when_lowercased(c: char) -> bool {
    c.to_lowercase().ne(std::iter::once(c))
}

impl From<&MatchingConfig> for MatchOptions {
    fn from(config: &MatchingConfig) -> Self {
        Self {
            case_insensitive: config.case_insensitive,
            skip_blank_lines: config.skip_blank_lines,
        }
    }
}
