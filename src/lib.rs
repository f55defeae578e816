// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Termtally library.
//!
//! Counts occurrences of a predefined vocabulary in text. A word list is
//! loaded into a prefix tree ([`data_structures::Trie`]), text is split into
//! tokens and every token found in the tree is tallied
//! ([`matching::WordCounter`]). The resulting [`matching::FrequencyMap`] is
//! listed on the console or saved as CSV by [`report`].

pub mod cli;
pub mod config;
pub mod data_structures;
pub mod error;
pub mod matching;
pub mod report;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for termtally.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
