// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Report configuration module.
//!
//! Controls how results are listed on the console and where the CSV copy
//! goes.

use std::path::PathBuf;

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matching::SortOrder;
use serde::{Deserialize, Serialize};

/// Widest word column the console table accepts.
const MAX_COLUMN_WIDTH: usize = 256;

/// Result reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the CSV file is written to
    pub output_dir: PathBuf,

    /// CSV file name without extension; a "(N)" suffix is added on collision
    pub csv_basename: String,

    /// First line of the CSV file
    pub csv_header: String,

    /// Width of the word column in the console table
    pub column_width: usize,

    /// Order of rows in the table and the CSV file
    pub sort: SortOrder,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            csv_basename: "result".to_string(),
            csv_header: "Word,count".to_string(),
            column_width: 40,
            sort: SortOrder::CountDesc,
        }
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.csv_basename.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "csv_basename cannot be empty".to_string(),
            ));
        }

        if self.csv_basename.contains(['/', '\\']) {
            return Err(ConfigError::ValidationError(format!(
                "csv_basename must be a plain file name, got: {}",
                self.csv_basename
            )));
        }

        if self.csv_header.is_empty() || self.csv_header.contains(['\n', '\r']) {
            return Err(ConfigError::ValidationError(
                "csv_header must be a single non-empty line".to_string(),
            ));
        }

        if self.column_width == 0 || self.column_width > MAX_COLUMN_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "column_width must be between 1 and {MAX_COLUMN_WIDTH}"
            )));
        }

        Ok(())
    }
}
