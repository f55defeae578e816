// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Opening and reading line-oriented sources.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{SourceError, SourceKind, SourceResult};

/// Opens the file at `path` for buffered line reading.
///
/// The path is probed first so a missing file is reported as
/// [`SourceError::NotFound`] rather than a bare I/O error.
pub fn open(kind: SourceKind, path: &Path) -> SourceResult<BufReader<File>> {
    if !path.is_file() {
        return Err(SourceError::NotFound {
            kind,
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| SourceError::Open {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(%kind, path = %path.display(), "Opened source");

    Ok(BufReader::new(file))
}

/// Feeds every line of `reader` to `f`, stopping at the first read error.
///
/// # Returns
///
/// The number of lines read.
pub(crate) fn for_each_line<R, F>(reader: R, kind: SourceKind, name: &str, mut f: F) -> SourceResult<usize>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut lines_read = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| SourceError::Read {
            kind,
            name: name.to_string(),
            line: index + 1,
            source,
        })?;
        f(&line);
        lines_read += 1;
    }
    Ok(lines_read)
}
