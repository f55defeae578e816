// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Splits lines of text into word tokens.
//!
//! A word character is an ASCII letter, an ASCII digit or `_`. Everything else,
//! including non-ASCII characters, separates tokens. Runs of separators
//! collapse into one boundary and never produce empty tokens.

use std::iter::FusedIterator;

/// Returns `true` if `c` can be part of a token.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns an iterator over the tokens of `line`, borrowed from it.
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}

/// Iterator over the tokens of a line.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    /// Unscanned remainder of the line
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = match self.rest.find(is_word_char) {
            Some(start) => start,
            None => {
                self.rest = "";
                return None;
            }
        };

        let tail = &self.rest[start..];
        let end = tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());
        let (token, rest) = tail.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
