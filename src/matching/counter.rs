// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Counts dictionary words in text.

use std::io::BufRead;
use std::path::Path;
use std::time::Instant;

use super::{source, tokenizer, FrequencyMap, MatchOptions};
use crate::data_structures::Trie;
use crate::error::{SourceKind, SourceResult};

/// Scans text and tallies the tokens found in a dictionary.
///
/// The counter only borrows the dictionary, so the trie cannot change while
/// a scan is running.
#[derive(Debug, Clone)]
pub struct WordCounter<'t> {
    dictionary: &'t Trie,
    options: MatchOptions,
}

impl<'t> WordCounter<'t> {
    /// Creates a counter over `dictionary` with default options.
    pub fn new(dictionary: &'t Trie) -> Self {
        Self::with_options(dictionary, MatchOptions::default())
    }

    /// Creates a counter over `dictionary` with the given options.
    pub fn with_options(dictionary: &'t Trie, options: MatchOptions) -> Self {
        Self { dictionary, options }
    }

    /// Counts the dictionary words of a single line into `counts`.
    ///
    /// # Returns
    ///
    /// The number of tokens examined, matched or not.
    pub fn count_line(&self, line: &str, counts: &mut FrequencyMap) -> usize {
        let mut tokens = 0;
        for token in tokenizer::tokens(line) {
            let word = self.options.normalize(token);
            if self.dictionary.search(&word) {
                counts.record(&word);
            }
            tokens += 1;
        }
        tokens
    }

    /// Counts the dictionary words of an in-memory text.
    pub fn count_str(&self, text: &str) -> FrequencyMap {
        let mut counts = FrequencyMap::new();
        for line in text.lines() {
            self.count_line(line, &mut counts);
        }
        counts
    }

    /// Counts the dictionary words of the text file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`](crate::error::SourceError) if the file is
    /// missing, cannot be opened, or fails part way through reading. Counts
    /// gathered before the failure are discarded.
    pub fn count_path<P: AsRef<Path>>(&self, path: P) -> SourceResult<FrequencyMap> {
        let path = path.as_ref();
        let reader = source::open(SourceKind::Text, path)?;
        self.count_reader(reader, &path.display().to_string())
    }

    /// Counts the dictionary words read from any buffered reader. `name`
    /// identifies the source in logs and errors.
    pub fn count_reader<R: BufRead>(&self, reader: R, name: &str) -> SourceResult<FrequencyMap> {
        let started = Instant::now();
        let mut counts = FrequencyMap::new();
        let mut tokens = 0;

        let lines = source::for_each_line(reader, SourceKind::Text, name, |line| {
            tokens += self.count_line(line, &mut counts);
        })?;

        tracing::info!(
            source = name,
            lines,
            tokens,
            matches = counts.total(),
            distinct = counts.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Processed text"
        );

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::DictionaryLoader;
    use std::io::Cursor;

    fn dictionary() -> Trie {
        DictionaryLoader::new().load_lines(["name", "detect", "ai"])
    }

    #[test]
    fn test_counts_only_dictionary_words() {
        let trie = dictionary();
        let counts = WordCounter::new(&trie)
            .count_reader(
                Cursor::new("Your NAME goes here.\nAI-driven, name-based detection\n"),
                "mem",
            )
            .unwrap();

        assert_eq!(counts.get("name"), Some(2));
        assert_eq!(counts.get("ai"), Some(1));
        assert_eq!(counts.get("detect"), None);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_count_line_reports_all_tokens() {
        let trie = dictionary();
        let counter = WordCounter::new(&trie);
        let mut counts = FrequencyMap::new();

        let tokens = counter.count_line("--AI-driven, name-based detection--", &mut counts);

        assert_eq!(tokens, 5);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_prefix_and_suffix_do_not_match() {
        let trie = dictionary();
        let counts = WordCounter::new(&trie).count_str("detection detects undetect names");

        assert!(counts.is_empty());
    }

    #[test]
    fn test_empty_dictionary_entry_never_matches() {
        let trie = DictionaryLoader::new().load_lines(["", "ai"]);
        let counts = WordCounter::new(&trie).count_str("  ,, ai ,,  \n\n");

        assert_eq!(counts.get(""), None);
        assert_eq!(counts.get("ai"), Some(1));
    }

    #[test]
    fn test_case_sensitive_counting() {
        let options = MatchOptions::new().case_insensitive(false);
        let trie = DictionaryLoader::with_options(options.clone()).load_lines(["AI"]);
        let counts = WordCounter::with_options(&trie, options).count_str("AI ai Ai AI");

        assert_eq!(counts.get("AI"), Some(2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_dictionary_unchanged_by_scan() {
        let trie = dictionary();
        let before = trie.words();

        let _ = WordCounter::new(&trie).count_str("name ai detect other");

        assert_eq!(trie.words(), before);
    }
}
