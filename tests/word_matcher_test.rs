// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! End-to-end tests: load a dictionary file, scan a text file, report.

use std::fs;
use std::path::{Path, PathBuf};

use termtally_lib::config::ReportConfig;
use termtally_lib::error::{SourceError, SourceKind};
use termtally_lib::matching::{DictionaryLoader, FrequencyMap, SortOrder, WordCounter};
use termtally_lib::report;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn scan_fixtures() -> FrequencyMap {
    let dictionary = DictionaryLoader::new()
        .load_path(fixture("predefined_words.txt"))
        .unwrap();
    WordCounter::new(&dictionary)
        .count_path(fixture("matching_text.txt"))
        .unwrap()
}

#[test]
fn test_dictionary_from_file() {
    let dictionary = DictionaryLoader::new()
        .load_path(fixture("predefined_words.txt"))
        .unwrap();

    assert!(dictionary.search("name"));
    assert!(dictionary.search("detect"));
    assert!(dictionary.search("ai"));
    assert!(!dictionary.search("word"));
    assert_eq!(dictionary.len(), 3);
}

#[test]
fn test_word_matcher() {
    let counts = scan_fixtures();

    assert_eq!(counts.get("detect"), None);
    assert_eq!(counts.get("name"), Some(2));
    assert_eq!(counts.get("ai"), Some(1));
    assert_eq!(counts.len(), 2);
}

#[test]
fn test_report_of_fixture_scan() {
    let counts = scan_fixtures();
    let table = report::render_table(&counts, &ReportConfig::default());

    let rows: Vec<&str> = table.lines().skip(3).take(2).collect();
    assert_eq!(rows[0], format!("{:<40} 2", "name"));
    assert_eq!(rows[1], format!("{:<40} 1", "ai"));
}

#[test]
fn test_save_fixture_scan_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig {
        output_dir: dir.path().to_path_buf(),
        sort: SortOrder::Alphabetical,
        ..Default::default()
    };

    let path = report::save_csv(&scan_fixtures(), &config).unwrap();

    assert_eq!(path.file_name().unwrap(), "result.csv");
    assert_eq!(fs::read_to_string(path).unwrap(), "Word,count\nai,1\nname,2\n");
}

#[test]
fn test_missing_text_file_is_fatal() {
    let dictionary = DictionaryLoader::new()
        .load_path(fixture("predefined_words.txt"))
        .unwrap();

    let err = WordCounter::new(&dictionary)
        .count_path(fixture("no_such_text.txt"))
        .unwrap_err();

    assert_eq!(err.kind(), SourceKind::Text);
    assert!(matches!(err, SourceError::NotFound { .. }));
}

#[test]
fn test_invalid_utf8_text_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.txt");
    fs::write(&path, b"name ai\nname \xff\xfe ai\n").unwrap();

    let dictionary = DictionaryLoader::new().load_lines(["name", "ai"]);
    let err = WordCounter::new(&dictionary).count_path(&path).unwrap_err();

    match err {
        SourceError::Read { kind, line, .. } => {
            assert_eq!(kind, SourceKind::Text);
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}
