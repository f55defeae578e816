// Copyright (c) 2025 Termtally Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Matching configuration module.

use super::{ConfigResult, Validate};
use serde::{Deserialize, Serialize};

/// How dictionary lines and text tokens are normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Lowercase dictionary words and text tokens before matching
    pub case_insensitive: bool,

    /// Skip blank dictionary lines instead of storing them as ""
    pub skip_blank_lines: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            skip_blank_lines: false,
        }
    }
}

impl Validate for MatchingConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
