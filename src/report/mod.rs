// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Presenting counted words.
//!
//! Results are listed as a two-column console table and can be saved as a
//! CSV file (see [`csv`]).

use std::io::{self, Write};

use crate::config::ReportConfig;
use crate::matching::FrequencyMap;

pub mod csv;

pub use self::csv::{save_csv, write_csv};

const WORD_HEADING: &str = "Predefined word";
const COUNT_HEADING: &str = "Match count";

/// Writes the results table for `counts` to `writer`.
pub fn write_table<W: Write>(
    mut writer: W,
    counts: &FrequencyMap,
    config: &ReportConfig,
) -> io::Result<()> {
    let width = config.column_width;
    let rule_len = width + 1 + COUNT_HEADING.len();

    writeln!(writer, "{}", "=".repeat(rule_len))?;
    writeln!(writer, "{WORD_HEADING:<width$} {COUNT_HEADING}")?;
    writeln!(writer, "{}", "-".repeat(rule_len))?;
    for (word, count) in counts.sorted(config.sort) {
        writeln!(writer, "{word:<width$} {count}")?;
    }
    writeln!(writer, "{}", "=".repeat(rule_len))?;

    Ok(())
}

/// Renders the results table for `counts` as a string.
pub fn render_table(counts: &FrequencyMap, config: &ReportConfig) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_table(&mut out, counts, config);
    String::from_utf8_lossy(&out).into_owned()
}
