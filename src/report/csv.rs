// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! CSV persistence of counted words.
//!
//! Matched words are made of ASCII letters, digits and `_` only, so no field
//! ever needs quoting.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::matching::{FrequencyMap, SortOrder};

/// Writes `header` followed by one `word,count` line per entry.
pub fn write_csv<W: Write>(
    mut writer: W,
    header: &str,
    counts: &FrequencyMap,
    order: SortOrder,
) -> io::Result<()> {
    writeln!(writer, "{header}")?;
    for (word, count) in counts.sorted(order) {
        writeln!(writer, "{word},{count}")?;
    }
    Ok(())
}

/// File name for the `attempt`-th candidate: `base.csv`, then `base(1).csv`,
/// `base(2).csv` and so on.
pub fn csv_file_name(basename: &str, attempt: u32) -> String {
    match attempt {
        0 => format!("{basename}.csv"),
        n => format!("{basename}({n}).csv"),
    }
}

/// Creates the first candidate file in `dir` that does not exist yet.
fn create_unique(dir: &Path, basename: &str) -> Result<(PathBuf, File), ReportError> {
    let mut attempt = 0;
    loop {
        let path = dir.join(csv_file_name(basename, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => return Err(ReportError::Create { path, source }),
        }
    }
}

/// Saves `counts` as a CSV file in the configured output directory.
///
/// Existing files are never overwritten; the name gets a numeric suffix
/// instead.
///
/// # Returns
///
/// The path of the file that was written.
pub fn save_csv(counts: &FrequencyMap, config: &ReportConfig) -> Result<PathBuf, ReportError> {
    let path = write_new_file(&config.output_dir, &config.csv_basename, |writer| {
        write_csv(writer, &config.csv_header, counts, config.sort)
    })?;

    tracing::info!(path = %path.display(), entries = counts.len(), "Saved results");
    Ok(path)
}

/// Creates a fresh file in `dir` and fills it with `write`.
///
/// A file whose contents could not be written is removed again.
fn write_new_file<F>(dir: &Path, basename: &str, write: F) -> Result<PathBuf, ReportError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let (path, file) = create_unique(dir, basename)?;

    let mut writer = BufWriter::new(file);
    let result = write(&mut writer).and_then(|()| writer.flush());
    drop(writer);

    if let Err(source) = result {
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "Failed to remove incomplete file");
        }
        return Err(ReportError::Write { path, source });
    }

    Ok(path)
}
