// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for termtally.
//!
//! Each area has its own error enum; [`TallyError`] rolls them up for the
//! binary. Lookups of absent words are not errors and never show up here.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

pub mod config;
pub mod report;
pub mod source;

pub use report::ReportError;
pub use source::{SourceError, SourceKind};

/// Result type alias used throughout termtally.
pub type TallyResult<T> = Result<T, TallyError>;

/// Result type for source reading operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Core error enum for termtally.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The dictionary or text source could not be read.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Results could not be persisted.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// IO errors that may occur while writing to the console.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: TallyError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: TallyError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// A simple error reporter implementation that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: RwLock<Option<Arc<dyn ErrorReporter>>>,
}

impl ErrorReporting {
    /// Set the error reporter, replacing any previous one.
    pub fn set_reporter(&self, reporter: Arc<dyn ErrorReporter>) {
        *self.reporter.write() = Some(reporter);
    }

    /// Report an error with context.
    pub fn report(&self, context: ErrorContext) {
        // Clone the Arc so the reporter runs without holding the lock
        let reporter = self.reporter.read().clone();
        match reporter {
            Some(reporter) => reporter.report(context),
            None => eprintln!("Error: {context}"),
        }
    }
}

static ERROR_REPORTING: Lazy<ErrorReporting> = Lazy::new(ErrorReporting::default);

/// Get the global error reporting instance.
pub fn get_error_reporting() -> &'static ErrorReporting {
    &ERROR_REPORTING
}

/// Set the global error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.set_reporter(reporter);
}
