// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Termtally - main entrypoint.
//!
//! Loads the configuration and the dictionary, scans the text file, prints
//! the match table and optionally saves it as CSV.

use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::Parser;
use termtally_lib::cli::Args;
use termtally_lib::config::{ConfigLoader, LogConfig, TallyConfig, ENV_PREFIX};
use termtally_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, TallyError, TallyResult,
    TracingErrorReporter,
};
use termtally_lib::matching::{DictionaryLoader, MatchOptions, WordCounter};
use termtally_lib::report;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so the results table on stdout stays clean.
fn init_logging(config: &LogConfig) -> TallyResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TallyError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs one dictionary load and text scan.
fn run(args: &Args, config: &TallyConfig) -> TallyResult<()> {
    let (Some(text_file), Some(dictionary_file)) = (&args.text_file, &args.dictionary_file) else {
        return Err(TallyError::Custom(
            "both a text file and a dictionary file are required".to_string(),
        ));
    };

    let options = MatchOptions::from(&config.matching);
    let dictionary = DictionaryLoader::with_options(options.clone()).load_path(dictionary_file)?;
    let counts = WordCounter::with_options(&dictionary, options).count_path(text_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_table(&mut out, &counts, &config.report)?;

    if args.wants_csv() {
        let path = report::save_csv(&counts, &config.report)?;
        writeln!(out, "Results saved to \"{}\" file.", path.display())?;
    }

    Ok(())
}

/// Reports `context` through the global reporter and exits with status 1.
fn fail(context: ErrorContext) -> ! {
    get_error_reporting().report(context);
    process::exit(1);
}

fn display_path(path: Option<&Path>) -> String {
    path.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            let context = ErrorContext::new(e.into(), "config");
            match &args.config {
                Some(path) => fail(context.with_details(format!("config file: {}", path.display()))),
                None => fail(context),
            }
        }
    };
    args.apply_overrides(&mut config);

    if let Err(e) = init_logging(&config.log) {
        fail(ErrorContext::new(e, "logging").with_details(format!("level: {}", config.log.level)));
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    if args.print_config {
        match config.to_toml() {
            Ok(toml) => print!("{toml}"),
            Err(e) => fail(ErrorContext::new(e.into(), "config")),
        }
        return;
    }

    info!(version = termtally_lib::VERSION, "Starting termtally");
    if let Err(e) = run(&args, &config) {
        let details = format!(
            "text file: {}, dictionary file: {}",
            display_path(args.text_file.as_deref()),
            display_path(args.dictionary_file.as_deref()),
        );
        fail(ErrorContext::new(e, "termtally").with_details(details));
    }
}
