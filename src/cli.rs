// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Command line arguments for the `termtally` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::TallyConfig;
use crate::matching::SortOrder;

/// Counts how often each predefined word occurs in a text file.
#[derive(Parser, Debug)]
#[command(name = "termtally", version, about)]
pub struct Args {
    /// Text file to scan
    #[arg(required_unless_present = "print_config")]
    pub text_file: Option<PathBuf>,

    /// File with one predefined word per line
    #[arg(required_unless_present = "print_config")]
    pub dictionary_file: Option<PathBuf>,

    /// Save the results as CSV when set to y, yes or true (case-insensitive)
    pub save_csv: Option<String>,

    /// Path to configuration file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the CSV file, overriding the configuration
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Row order of the results, overriding the configuration
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Whether the results should be saved as CSV.
    pub fn wants_csv(&self) -> bool {
        self.save_csv.as_deref().is_some_and(parse_save_flag)
    }

    /// Applies command line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut TallyConfig) {
        if let Some(dir) = &self.output_dir {
            config.report.output_dir = dir.clone();
        }
        if let Some(sort) = self.sort {
            config.report.sort = sort;
        }
    }
}

/// Interprets the save flag: `y`, `yes` and `true` in any case, surrounded by
/// any whitespace, mean "save". Everything else means "don't".
pub fn parse_save_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true"
    )
}
