// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Source error module.
//!
//! Errors raised while probing, opening, or reading the dictionary and text
//! sources. Any of these aborts the load or scan that hit it.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

/// Which input a source error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The newline-delimited list of predefined words
    Dictionary,

    /// The document being scanned
    Text,
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Dictionary => write!(f, "dictionary"),
            SourceKind::Text => write!(f, "text"),
        }
    }
}

/// Errors that can occur while reading a dictionary or text source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source path does not exist or is not a regular file.
    #[error("{kind} file not found: {}", .path.display())]
    NotFound {
        /// Which source was missing
        kind: SourceKind,
        /// The path that was probed
        path: PathBuf,
    },

    /// The source exists but could not be opened.
    #[error("failed to open {kind} file {}: {source}", .path.display())]
    Open {
        /// Which source failed
        kind: SourceKind,
        /// The path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Reading failed part way through the source.
    #[error("failed to read {kind} source {name} at line {line}: {source}")]
    Read {
        /// Which source failed
        kind: SourceKind,
        /// Display name of the source (usually its path)
        name: String,
        /// 1-based number of the line that could not be read
        line: usize,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SourceError {
    /// Returns which source the error refers to.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceError::NotFound { kind, .. }
            | SourceError::Open { kind, .. }
            | SourceError::Read { kind, .. } => *kind,
        }
    }
}
