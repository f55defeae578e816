// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration module for termtally.
//!
//! Settings are layered: built-in defaults, then an optional TOML or JSON
//! file, then environment variables prefixed with [`ENV_PREFIX`] using `__`
//! between path segments (for example `TERMTALLY__REPORT__SORT=alphabetical`).
//! The merged result is validated before use.

use std::path::{Path, PathBuf};

use crate::error::config::ConfigError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

pub mod matching;
pub mod report;

pub use matching::MatchingConfig;
pub use report::ReportConfig;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Default environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "TERMTALLY";

/// A trait for types that can be validated.
pub trait Validate {
    /// Validates that the configuration is correct.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the configuration is valid
    /// * `Err(ConfigError)` if the configuration is invalid
    fn validate(&self) -> ConfigResult<()>;
}

/// Main configuration for termtally.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TallyConfig {
    /// Normalization shared by the loader and the counter
    pub matching: MatchingConfig,

    /// Console table and CSV output
    pub report: ReportConfig,

    /// Log configuration
    pub log: LogConfig,
}

impl TallyConfig {
    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}

impl Validate for TallyConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.matching.validate()?;
        self.report.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error); `RUST_LOG` wins when set
    pub level: String,

    /// Whether to log in JSON format
    pub json: bool,

    /// Whether to include source code locations in logs
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> ConfigResult<()> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "Invalid log level: {}",
                self.level
            ))),
        }
    }
}

/// Configuration loader for termtally.
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Optional path to the configuration file
    /// * `env_prefix` - Prefix for environment variables that override configuration values
    pub fn new<P: AsRef<Path>>(config_path: Option<P>, env_prefix: &str) -> Self {
        Self {
            config_path: config_path.map(|p| p.as_ref().to_path_buf()),
            env_prefix: env_prefix.to_string(),
        }
    }

    /// Loads the configuration from defaults, the file (if any) and the environment.
    ///
    /// # Returns
    ///
    /// * `Ok(TallyConfig)` if the configuration was loaded and validated
    /// * `Err(ConfigError)` if there was an error loading the configuration
    pub fn load(&self) -> ConfigResult<TallyConfig> {
        let defaults = Config::try_from(&TallyConfig::default())
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(path) = &self.config_path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }

            let format = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => FileFormat::Toml,
                Some("json") => FileFormat::Json,
                _ => return Err(ConfigError::UnsupportedFormat(path.clone())),
            };
            tracing::debug!(path = %path.display(), "Reading configuration file");
            builder = builder.add_source(File::from(path.as_path()).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        let config: TallyConfig = builder
            .build()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
