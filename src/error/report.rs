// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Report error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting results.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The output file could not be created.
    #[error("failed to create results file {}: {source}", .path.display())]
    Create {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing to the output file failed.
    #[error("failed to write results file {}: {source}", .path.display())]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
