// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Builds the dictionary trie from a word list.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use super::{source, MatchOptions};
use crate::data_structures::Trie;
use crate::error::{SourceKind, SourceResult};

/// Loads newline-delimited word lists into a [`Trie`].
///
/// Each line is trimmed and, unless case-insensitivity is turned off,
/// lowercased. Blank lines are stored as the empty string unless
/// `skip_blank_lines` is set; the tokenizer never produces an empty token, so
/// such an entry never matches anything.
#[derive(Debug, Clone, Default)]
pub struct DictionaryLoader {
    options: MatchOptions,
}

impl DictionaryLoader {
    /// Creates a loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with the given options.
    pub fn with_options(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Loads the word list at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`](crate::error::SourceError) if the file is
    /// missing, cannot be opened, or fails part way through reading. No trie
    /// is returned in that case.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> SourceResult<Trie> {
        let path = path.as_ref();
        let reader = source::open(SourceKind::Dictionary, path)?;
        self.load_reader(reader, &path.display().to_string())
    }

    /// Loads a word list from any buffered reader. `name` identifies the
    /// source in logs and errors.
    pub fn load_reader<R: BufRead>(&self, reader: R, name: &str) -> SourceResult<Trie> {
        let started = Instant::now();
        let mut trie = Trie::new();

        let lines = source::for_each_line(reader, SourceKind::Dictionary, name, |line| {
            self.insert_line(&mut trie, line)
        })?;

        tracing::info!(
            source = name,
            lines,
            words = trie.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Loaded predefined words"
        );

        Ok(trie)
    }

    /// Builds a trie from in-memory lines.
    pub fn load_lines<I, S>(&self, lines: I) -> Trie
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for line in lines {
            self.insert_line(&mut trie, line.as_ref());
        }
        trie
    }

    fn insert_line(&self, trie: &mut Trie, line: &str) {
        let word = line.trim();
        if word.is_empty() && self.options.skip_blank_lines {
            return;
        }
        trie.add(&self.options.normalize(word));
    }
}
